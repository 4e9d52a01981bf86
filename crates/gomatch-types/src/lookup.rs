//! Field and method lookup.
//!
//! Lookup follows the selector rules of the language: methods declared on
//! a defined type, fields of its struct, and members promoted through
//! embedded fields, shallowest depth first. Two candidates at the same
//! depth make the selector ambiguous and the lookup fails.

use crate::object::{Object, ObjectId, ObjectKind};
use crate::ty::{Type, TypeId};
use crate::universe::{MAX_DEPTH, Universe};

/// A successful field or method lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// The field or method found.
    pub obj: ObjectId,
    /// Field indices walked through embedded fields, then the member index.
    pub index: Vec<usize>,
    /// Whether a pointer was dereferenced on the way.
    pub indirect: bool,
}

#[derive(Debug, Clone)]
struct Embedding {
    ty: TypeId,
    index: Vec<usize>,
    indirect: bool,
}

impl Universe {
    /// Looks up a field or method called `name` on values of type `ty`.
    ///
    /// A method with a pointer receiver is only found when the receiver is
    /// a pointer, was reached through an embedded pointer, or is
    /// `addressable`.
    #[must_use]
    pub fn lookup_field_or_method(&self, ty: TypeId, addressable: bool, name: &str) -> Option<Lookup> {
        if name == "_" {
            return None;
        }
        let (start, indirect) = match self.ty(ty) {
            Some(Type::Pointer(elem)) => match self.ty(*elem) {
                // Method sets of pointers to pointers or interfaces are empty.
                Some(Type::Pointer(_)) => return None,
                _ if self.is_interface(*elem) => return None,
                _ => (*elem, true),
            },
            _ => (ty, false),
        };

        let mut current = vec![Embedding {
            ty: start,
            index: Vec::new(),
            indirect,
        }];
        let mut seen = Vec::new();
        for _ in 0..MAX_DEPTH {
            if current.is_empty() {
                break;
            }
            let mut found: Option<Lookup> = None;
            let mut ambiguous = false;
            let mut next = Vec::new();
            for embedding in &current {
                if let Some(Type::Named(named)) = self.ty(embedding.ty) {
                    if seen.contains(&embedding.ty) {
                        continue;
                    }
                    seen.push(embedding.ty);
                    if let Some((position, method)) = self.find_by_name(&named.methods, name) {
                        ambiguous |= found.is_some();
                        found = Some(extend(embedding, position, method));
                        continue;
                    }
                }
                match self.ty(self.underlying(embedding.ty)) {
                    Some(Type::Struct(fields)) => {
                        for (position, &field) in fields.fields.iter().enumerate() {
                            let Some(object) = self.object(field) else {
                                continue;
                            };
                            if object.name() == name {
                                ambiguous |= found.is_some();
                                found = Some(extend(embedding, position, field));
                                continue;
                            }
                            if matches!(object.kind(), ObjectKind::Field { embedded: true }) {
                                next.push(self.embed(embedding, position, object.ty()));
                            }
                        }
                    }
                    Some(Type::Interface(_)) => {
                        let methods = self.interface_methods(self.underlying(embedding.ty));
                        if let Some((position, method)) = self.find_by_name(&methods, name) {
                            ambiguous |= found.is_some();
                            found = Some(extend(embedding, position, method));
                        }
                    }
                    _ => {}
                }
            }
            if ambiguous {
                return None;
            }
            if let Some(hit) = found {
                return self.check_receiver(hit, addressable);
            }
            current = next;
        }
        None
    }

    fn check_receiver(&self, hit: Lookup, addressable: bool) -> Option<Lookup> {
        let object = self.object(hit.obj)?;
        if object.is_func() && !hit.indirect && !addressable {
            let recv = self.recv_type(hit.obj)?;
            if matches!(self.ty(recv), Some(Type::Pointer(_))) {
                return None;
            }
        }
        Some(hit)
    }

    fn embed(&self, from: &Embedding, position: usize, field_ty: TypeId) -> Embedding {
        let mut index = from.index.clone();
        index.push(position);
        match self.ty(field_ty) {
            Some(Type::Pointer(elem)) => Embedding {
                ty: *elem,
                index,
                indirect: true,
            },
            _ => Embedding {
                ty: field_ty,
                index,
                indirect: from.indirect,
            },
        }
    }

    fn find_by_name(&self, objects: &[ObjectId], name: &str) -> Option<(usize, ObjectId)> {
        objects
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, id)| self.object(id).is_some_and(|object| object.name() == name))
    }

    /// Returns the complete method set of an interface, embedded
    /// interfaces included, without duplicates by name.
    #[must_use]
    pub fn interface_methods(&self, iface: TypeId) -> Vec<ObjectId> {
        let mut methods = Vec::new();
        self.collect_interface_methods(iface, &mut methods, 0);
        methods
    }

    fn collect_interface_methods(&self, iface: TypeId, out: &mut Vec<ObjectId>, depth: usize) {
        if depth > MAX_DEPTH {
            return;
        }
        let Some(Type::Interface(data)) = self.ty(self.underlying(iface)) else {
            return;
        };
        for &method in &data.methods {
            let name = self.object(method).map(Object::name);
            if !out
                .iter()
                .any(|&known| self.object(known).map(Object::name) == name)
            {
                out.push(method);
            }
        }
        for &embedded in &data.embedded {
            self.collect_interface_methods(embedded, out, depth + 1);
        }
    }

    /// Returns the methods of a defined type or pointer to one, as found
    /// through [`Self::lookup_field_or_method`].
    #[must_use]
    pub fn declared_methods(&self, ty: TypeId) -> &[ObjectId] {
        let base = self.deref(ty).unwrap_or(ty);
        match self.ty(base) {
            Some(Type::Named(named)) => &named.methods,
            _ => &[],
        }
    }
}

fn extend(from: &Embedding, position: usize, obj: ObjectId) -> Lookup {
    let mut index = from.index.clone();
    index.push(position);
    Lookup {
        obj,
        index,
        indirect: from.indirect,
    }
}
