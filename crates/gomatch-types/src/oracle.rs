//! The semantic oracle consulted by predicates.
//!
//! [`Oracle`] is the read side of a type-checked package: object and type
//! lookups keyed by node identity, plus a handful of metadata hooks that
//! let callers keep the tables in step with trees they build. [`Package`]
//! is the in-memory implementation used by tests and by hosts that fill
//! the tables themselves.

use std::cell::{Ref, RefCell};

use gomatch_ast::{CallExpr, Ident, Node, NodeId};

use crate::callee;
use crate::info::{Info, Selection, TypeAndValue};
use crate::object::ObjectId;
use crate::ty::TypeId;
use crate::universe::{PackageId, Universe};

/// Semantic queries about one type-checked package.
pub trait Oracle {
    /// Returns the arena every handle refers to.
    fn universe(&self) -> &Universe;

    /// Returns the object declared by the identifier with this id.
    fn defined_object(&self, id: NodeId) -> Option<ObjectId>;

    /// Returns the object referred to by the identifier with this id.
    fn used_object(&self, id: NodeId) -> Option<ObjectId>;

    /// Returns the recorded type and mode of the expression with this id.
    fn type_and_value(&self, id: NodeId) -> Option<TypeAndValue>;

    /// Returns the resolved selector expression with this id.
    fn selection(&self, id: NodeId) -> Option<Selection>;

    /// Records the type of a node.
    fn update_type(&self, id: NodeId, tv: TypeAndValue);

    /// Records a use of an object.
    fn update_uses(&self, id: NodeId, obj: ObjectId);

    /// Records a definition of an object.
    fn update_defs(&self, id: NodeId, obj: ObjectId);

    /// Copies every fact recorded for `from` onto `to`.
    fn copy_type_info(&self, from: NodeId, to: NodeId) {
        if let Some(tv) = self.type_and_value(from) {
            self.update_type(to, tv);
        }
        if let Some(obj) = self.used_object(from) {
            self.update_uses(to, obj);
        }
        if let Some(obj) = self.defined_object(from) {
            self.update_defs(to, obj);
        }
    }

    /// Returns the object an identifier declares or refers to.
    fn object_of(&self, ident: &Ident) -> Option<ObjectId> {
        self.defined_object(ident.id)
            .or_else(|| self.used_object(ident.id))
    }

    /// Returns the type of an expression-like node.
    ///
    /// Identifiers without a recorded type fall back to their object's
    /// type.
    fn type_of(&self, node: Node<'_>) -> Option<TypeId> {
        let id = node.id()?;
        if let Some(tv) = self.type_and_value(id) {
            return Some(tv.ty);
        }
        let ident = node.ident()?;
        let obj = self.object_of(ident)?;
        self.universe().object(obj).map(crate::Object::ty)
    }

    /// Returns the function, method, builtin or variable a call invokes.
    fn callee(&self, call: &CallExpr) -> Option<ObjectId> {
        callee::callee(self, call)
    }

    /// Returns the statically known function or concrete method a call
    /// invokes.
    fn static_callee(&self, call: &CallExpr) -> Option<ObjectId> {
        callee::static_callee(self, call)
    }
}

/// An in-memory package: a universe plus recorded facts.
#[derive(Debug, Default)]
pub struct Package {
    universe: Universe,
    id: Option<PackageId>,
    info: RefCell<Info>,
}

impl Package {
    /// Creates a package named `name` at `path` in a fresh universe.
    #[must_use]
    pub fn new(path: &str, name: &str) -> Self {
        let mut universe = Universe::new();
        let id = universe.new_package(path, name);
        Self {
            universe,
            id: Some(id),
            info: RefCell::new(Info::default()),
        }
    }

    /// Returns the package handle.
    #[must_use]
    pub const fn id(&self) -> Option<PackageId> {
        self.id
    }

    /// Returns the universe for declaring objects and types.
    pub const fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    /// Returns the recorded facts.
    #[must_use]
    pub fn info(&self) -> Ref<'_, Info> {
        self.info.borrow()
    }

    /// Records that `ident` declares `obj`.
    pub fn define(&mut self, ident: &Ident, obj: ObjectId) {
        self.info.get_mut().defs.insert(ident.id, obj);
    }

    /// Records that `ident` refers to `obj`.
    pub fn refer(&mut self, ident: &Ident, obj: ObjectId) {
        self.info.get_mut().uses.insert(ident.id, obj);
    }

    /// Records the type of the node with this id.
    pub fn record_type(&mut self, id: NodeId, tv: TypeAndValue) {
        self.info.get_mut().types.insert(id, tv);
    }

    /// Records a resolved selector expression.
    pub fn record_selection(&mut self, id: NodeId, selection: Selection) {
        self.info.get_mut().selections.insert(id, selection);
    }
}

impl Oracle for Package {
    fn universe(&self) -> &Universe {
        &self.universe
    }

    fn defined_object(&self, id: NodeId) -> Option<ObjectId> {
        self.info.borrow().defs.get(&id).copied()
    }

    fn used_object(&self, id: NodeId) -> Option<ObjectId> {
        self.info.borrow().uses.get(&id).copied()
    }

    fn type_and_value(&self, id: NodeId) -> Option<TypeAndValue> {
        self.info.borrow().types.get(&id).copied()
    }

    fn selection(&self, id: NodeId) -> Option<Selection> {
        self.info.borrow().selections.get(&id).cloned()
    }

    fn update_type(&self, id: NodeId, tv: TypeAndValue) {
        self.info.borrow_mut().types.insert(id, tv);
    }

    fn update_uses(&self, id: NodeId, obj: ObjectId) {
        self.info.borrow_mut().uses.insert(id, obj);
    }

    fn update_defs(&self, id: NodeId, obj: ObjectId) {
        self.info.borrow_mut().defs.insert(id, obj);
    }
}
