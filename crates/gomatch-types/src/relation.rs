//! Type identity, assignability, convertibility and interface satisfaction.

use gomatch_ast::ChanDir;

use crate::object::{Object, ObjectId, ObjectKind};
use crate::ty::{BasicKind, Signature, Type, TypeId};
use crate::universe::{MAX_DEPTH, Universe};

static INVALID: Type = Type::Basic(BasicKind::Invalid);

impl Universe {
    /// Reports whether two types are identical.
    ///
    /// Defined types are identical only to themselves. Receivers are not
    /// part of a signature's identity.
    #[must_use]
    pub fn identical(&self, x: TypeId, y: TypeId) -> bool {
        self.identical_at(x, y, true, 0)
    }

    /// Like [`Self::identical`] but struct tags are not compared.
    #[must_use]
    pub fn identical_ignore_tags(&self, x: TypeId, y: TypeId) -> bool {
        self.identical_at(x, y, false, 0)
    }

    fn identical_at(&self, x: TypeId, y: TypeId, tags: bool, depth: usize) -> bool {
        if x == y {
            return true;
        }
        if depth > MAX_DEPTH {
            return false;
        }
        let next = depth + 1;
        let (Some(tx), Some(ty)) = (self.ty(x), self.ty(y)) else {
            return false;
        };
        match (tx, ty) {
            (Type::Basic(a), Type::Basic(b)) => a == b,
            (Type::Pointer(a), Type::Pointer(b)) | (Type::Slice(a), Type::Slice(b)) => {
                self.identical_at(*a, *b, tags, next)
            }
            (Type::Array { len: la, elem: ea }, Type::Array { len: lb, elem: eb }) => {
                la == lb && self.identical_at(*ea, *eb, tags, next)
            }
            (Type::Map { key: ka, value: va }, Type::Map { key: kb, value: vb }) => {
                self.identical_at(*ka, *kb, tags, next) && self.identical_at(*va, *vb, tags, next)
            }
            (Type::Chan { dir: da, elem: ea }, Type::Chan { dir: db, elem: eb }) => {
                da == db && self.identical_at(*ea, *eb, tags, next)
            }
            (Type::Signature(a), Type::Signature(b)) => self.identical_signatures(a, b, tags, next),
            (Type::Tuple(a), Type::Tuple(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(&ea, &eb)| self.identical_at(ea, eb, tags, next))
            }
            (Type::Struct(a), Type::Struct(b)) => {
                a.fields.len() == b.fields.len()
                    && a.fields.iter().zip(&b.fields).enumerate().all(|(i, (&fa, &fb))| {
                        (!tags || a.tag(i) == b.tag(i)) && self.identical_fields(fa, fb, tags, next)
                    })
            }
            (Type::Interface(_), Type::Interface(_)) => {
                let mut ma = self.interface_methods(x);
                let mut mb = self.interface_methods(y);
                if ma.len() != mb.len() {
                    return false;
                }
                ma.sort_by(|&a, &b| self.name_of(a).cmp(self.name_of(b)));
                mb.sort_by(|&a, &b| self.name_of(a).cmp(self.name_of(b)));
                ma.iter().zip(&mb).all(|(&a, &b)| {
                    self.name_of(a) == self.name_of(b) && self.identical_objects(a, b, tags, next)
                })
            }
            _ => false,
        }
    }

    fn identical_signatures(&self, a: &Signature, b: &Signature, tags: bool, depth: usize) -> bool {
        a.variadic == b.variadic
            && self.identical_vars(&a.params, &b.params, tags, depth)
            && self.identical_vars(&a.results, &b.results, tags, depth)
    }

    fn identical_vars(&self, a: &[ObjectId], b: &[ObjectId], tags: bool, depth: usize) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(&va, &vb)| self.identical_objects(va, vb, tags, depth))
    }

    fn identical_objects(&self, a: ObjectId, b: ObjectId, tags: bool, depth: usize) -> bool {
        match (self.object(a), self.object(b)) {
            (Some(oa), Some(ob)) => self.identical_at(oa.ty(), ob.ty(), tags, depth),
            _ => false,
        }
    }

    fn identical_fields(&self, a: ObjectId, b: ObjectId, tags: bool, depth: usize) -> bool {
        let (Some(oa), Some(ob)) = (self.object(a), self.object(b)) else {
            return false;
        };
        oa.name() == ob.name()
            && matches!(
                (oa.kind(), ob.kind()),
                (ObjectKind::Field { embedded: ea }, ObjectKind::Field { embedded: eb }) if ea == eb
            )
            && self.identical_at(oa.ty(), ob.ty(), tags, depth)
    }

    fn name_of(&self, id: ObjectId) -> &str {
        self.object(id).map_or("", Object::name)
    }

    /// Reports whether a value of type `value` may be assigned to a
    /// variable of type `target`.
    #[must_use]
    pub fn assignable(&self, value: TypeId, target: TypeId) -> bool {
        if self.identical(value, target) {
            return true;
        }
        if let Some(kind) = self.untyped_kind(value) {
            return self.untyped_assignable(kind, target);
        }
        let value_under = self.underlying(value);
        let target_under = self.underlying(target);
        if self.identical(value_under, target_under)
            && (!self.is_named(value) || !self.is_named(target))
        {
            return true;
        }
        if self.is_interface(target) && self.implements(value, target) {
            return true;
        }
        if let (
            Some(Type::Chan {
                dir: ChanDir::Both,
                elem: ve,
            }),
            Some(Type::Chan { elem: te, .. }),
        ) = (self.ty(value_under), self.ty(target_under))
        {
            return self.identical(*ve, *te) && (!self.is_named(value) || !self.is_named(target));
        }
        false
    }

    fn untyped_kind(&self, ty: TypeId) -> Option<BasicKind> {
        match self.ty(ty) {
            Some(Type::Basic(kind)) if kind.is_untyped() => Some(*kind),
            _ => None,
        }
    }

    fn untyped_assignable(&self, kind: BasicKind, target: TypeId) -> bool {
        if kind == BasicKind::UntypedNil {
            return matches!(
                self.ty(self.underlying(target)),
                Some(
                    Type::Pointer(_)
                        | Type::Signature(_)
                        | Type::Slice(_)
                        | Type::Map { .. }
                        | Type::Chan { .. }
                        | Type::Interface(_)
                        | Type::Basic(BasicKind::UnsafePointer)
                )
            );
        }
        if self.is_interface(target) {
            let default = self.basic(kind.default_kind());
            return self.implements(default, target);
        }
        let Some(target_kind) = self.basic_kind(target) else {
            return false;
        };
        match kind {
            BasicKind::UntypedBool => target_kind.is_boolean(),
            BasicKind::UntypedString => target_kind.is_string(),
            BasicKind::UntypedInt | BasicKind::UntypedRune => target_kind.is_numeric(),
            BasicKind::UntypedFloat => target_kind.is_float() || target_kind.is_complex(),
            BasicKind::UntypedComplex => target_kind.is_complex(),
            _ => false,
        }
    }

    /// Reports whether a value of type `value` may be converted to `target`.
    #[must_use]
    pub fn convertible(&self, value: TypeId, target: TypeId) -> bool {
        if self.assignable(value, target) {
            return true;
        }
        let value_under = self.underlying(value);
        let target_under = self.underlying(target);
        if self.identical_ignore_tags(value_under, target_under) {
            return true;
        }
        if let (Type::Pointer(vp), Type::Pointer(tp)) = (
            self.ty_or_invalid(value),
            self.ty_or_invalid(target),
        ) && self.identical_ignore_tags(self.underlying(*vp), self.underlying(*tp))
        {
            return true;
        }

        let value_kind = self.basic_kind(value);
        let target_kind = self.basic_kind(target);
        if let (Some(vk), Some(tk)) = (value_kind, target_kind) {
            let real = |k: BasicKind| k.is_integer() || k.is_float();
            if (real(vk) && real(tk)) || (vk.is_complex() && tk.is_complex()) {
                return true;
            }
            if vk.is_integer() && tk.is_string() {
                return true;
            }
        }
        if target_kind.is_some_and(BasicKind::is_string) && self.is_byte_or_rune_slice(value) {
            return true;
        }
        if value_kind.is_some_and(BasicKind::is_string) && self.is_byte_or_rune_slice(target) {
            return true;
        }

        let is_unsafe = |kind: Option<BasicKind>| kind == Some(BasicKind::UnsafePointer);
        let is_pointer_like = |ty: TypeId| {
            matches!(self.ty_or_invalid(self.underlying(ty)), Type::Pointer(_))
                || self.basic_kind(ty) == Some(BasicKind::Uintptr)
        };
        if (is_unsafe(value_kind) && is_pointer_like(target))
            || (is_unsafe(target_kind) && is_pointer_like(value))
        {
            return true;
        }

        if let Type::Slice(elem) = self.ty_or_invalid(value_under) {
            match self.ty_or_invalid(target_under) {
                Type::Array { elem: target_elem, .. } => {
                    return self.identical(*elem, *target_elem);
                }
                Type::Pointer(array) => {
                    if let Type::Array { elem: target_elem, .. } =
                        self.ty_or_invalid(self.underlying(*array))
                    {
                        return self.identical(*elem, *target_elem);
                    }
                }
                _ => {}
            }
        }
        false
    }

    fn ty_or_invalid(&self, ty: TypeId) -> &Type {
        self.ty(ty).unwrap_or(&INVALID)
    }

    fn is_byte_or_rune_slice(&self, ty: TypeId) -> bool {
        match self.ty_or_invalid(self.underlying(ty)) {
            Type::Slice(elem) => matches!(
                self.basic_kind(*elem),
                Some(BasicKind::Uint8 | BasicKind::Int32)
            ),
            _ => false,
        }
    }

    /// Reports whether type `ty` implements interface `iface`.
    ///
    /// Methods with pointer receivers only count when `ty` is itself a
    /// pointer. Returns `false` when `iface` is not an interface.
    #[must_use]
    pub fn implements(&self, ty: TypeId, iface: TypeId) -> bool {
        self.implements_with(ty, iface, false)
    }

    /// Reports whether `*ty` implements interface `iface`, without
    /// requiring the pointer type to exist in the universe.
    #[must_use]
    pub fn pointer_implements(&self, ty: TypeId, iface: TypeId) -> bool {
        self.implements_with(ty, iface, true)
    }

    fn implements_with(&self, ty: TypeId, iface: TypeId, addressable: bool) -> bool {
        if !self.is_interface(iface) {
            return false;
        }
        let required = self.interface_methods(iface);
        if self.is_interface(ty) {
            let provided = self.interface_methods(ty);
            return required.iter().all(|&want| {
                provided.iter().any(|&have| {
                    self.name_of(have) == self.name_of(want) && self.same_method_type(have, want)
                })
            });
        }
        required.iter().all(|&want| {
            self.lookup_field_or_method(ty, addressable, self.name_of(want))
                .and_then(|hit| self.object(hit.obj).map(|obj| (hit.obj, obj.is_func())))
                .is_some_and(|(have, is_func)| is_func && self.same_method_type(have, want))
        })
    }

    fn same_method_type(&self, a: ObjectId, b: ObjectId) -> bool {
        match (self.object(a), self.object(b)) {
            (Some(oa), Some(ob)) => self.identical(oa.ty(), ob.ty()),
            _ => false,
        }
    }
}
