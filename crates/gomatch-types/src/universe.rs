//! The object and type arena.
//!
//! A [`Universe`] owns every object, type and package known to one
//! analysis. Handles ([`ObjectId`], [`TypeId`], [`PackageId`]) index into
//! it and are only meaningful for the universe that issued them.

use std::collections::HashMap;

use gomatch_ast::ChanDir;

use crate::object::{Object, ObjectId, ObjectKind};
use crate::ty::{BasicKind, Interface, Named, Signature, Struct, Type, TypeId};

/// Handle of a package in a [`Universe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageId(u32);

/// A package and its top-level scope.
#[derive(Debug, Clone, Default)]
pub struct PackageData {
    path: String,
    name: String,
    scope: HashMap<String, ObjectId>,
}

impl PackageData {
    /// Returns the import path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the package name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Names of the predeclared builtin functions.
pub const BUILTINS: [&str; 18] = [
    "append", "cap", "clear", "close", "complex", "copy", "delete", "imag", "len", "make", "max",
    "min", "new", "panic", "print", "println", "real", "recover",
];

/// Arena of objects, types and packages plus the universe scope.
#[derive(Debug, Clone)]
pub struct Universe {
    objects: Vec<Object>,
    types: Vec<Type>,
    packages: Vec<PackageData>,
    scope: HashMap<String, ObjectId>,
    basics: HashMap<BasicKind, TypeId>,
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl Universe {
    /// Creates a universe populated with the predeclared identifiers.
    #[must_use]
    pub fn new() -> Self {
        let mut universe = Self {
            objects: Vec::new(),
            types: Vec::new(),
            packages: Vec::new(),
            scope: HashMap::new(),
            basics: HashMap::new(),
        };
        universe.predeclare();
        universe
    }

    fn predeclare(&mut self) {
        let all_basics = [
            BasicKind::Invalid,
            BasicKind::UnsafePointer,
            BasicKind::UntypedBool,
            BasicKind::UntypedInt,
            BasicKind::UntypedRune,
            BasicKind::UntypedFloat,
            BasicKind::UntypedComplex,
            BasicKind::UntypedString,
            BasicKind::UntypedNil,
        ];
        for kind in all_basics {
            let id = self.push_type(Type::Basic(kind));
            self.basics.insert(kind, id);
        }
        for (name, kind) in BasicKind::NAMED {
            let id = self.push_type(Type::Basic(kind));
            self.basics.insert(kind, id);
            self.declare_universe(name, ObjectKind::TypeName, id);
        }
        let byte = self.basic(BasicKind::Uint8);
        self.declare_universe("byte", ObjectKind::TypeName, byte);
        let rune = self.basic(BasicKind::Int32);
        self.declare_universe("rune", ObjectKind::TypeName, rune);

        let any = self.push_type(Type::Interface(Interface::default()));
        self.declare_universe("any", ObjectKind::TypeName, any);

        let (_, error) = self.new_named(None, "error");
        let error_iface = self.push_type(Type::Interface(Interface::default()));
        self.set_underlying(error, error_iface);
        let string = self.basic(BasicKind::String);
        let result = self.new_var(None, "", string);
        self.add_interface_method(error, "Error", Vec::new(), vec![result]);

        let untyped_bool = self.basic(BasicKind::UntypedBool);
        self.declare_universe("true", ObjectKind::Const, untyped_bool);
        self.declare_universe("false", ObjectKind::Const, untyped_bool);
        let untyped_int = self.basic(BasicKind::UntypedInt);
        self.declare_universe("iota", ObjectKind::Const, untyped_int);
        let untyped_nil = self.basic(BasicKind::UntypedNil);
        self.declare_universe("nil", ObjectKind::Nil, untyped_nil);

        let invalid = self.invalid();
        for name in BUILTINS {
            self.declare_universe(name, ObjectKind::Builtin, invalid);
        }

        let unsafe_pkg = self.new_package("unsafe", "unsafe");
        let pointer = self.basic(BasicKind::UnsafePointer);
        let obj = self.push_object(Object::new(
            "Pointer",
            ObjectKind::TypeName,
            pointer,
            Some(unsafe_pkg),
        ));
        self.declare_in(Some(unsafe_pkg), "Pointer", obj);
    }

    /// Returns the `unsafe` package.
    #[must_use]
    pub const fn unsafe_package(&self) -> PackageId {
        PackageId(0)
    }

    fn declare_universe(&mut self, name: &str, kind: ObjectKind, ty: TypeId) -> ObjectId {
        let id = self.push_object(Object::new(name, kind, ty, None));
        self.scope.insert(name.to_owned(), id);
        id
    }

    fn push_object(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(index_u32(self.objects.len()));
        self.objects.push(object);
        id
    }

    fn push_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(index_u32(self.types.len()));
        self.types.push(ty);
        id
    }

    fn declare_in(&mut self, pkg: Option<PackageId>, name: &str, id: ObjectId) {
        let Some(pkg) = pkg else {
            return;
        };
        if let Some(data) = self.packages.get_mut(pkg.0 as usize) {
            data.scope.insert(name.to_owned(), id);
        }
    }

    /// Returns the object behind a handle.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.index())
    }

    /// Returns the type behind a handle.
    #[must_use]
    pub fn ty(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    /// Returns the package behind a handle.
    #[must_use]
    pub fn package(&self, id: PackageId) -> Option<&PackageData> {
        self.packages.get(id.0 as usize)
    }

    /// Looks up a predeclared identifier.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ObjectId> {
        self.scope.get(name).copied()
    }

    /// Looks up a top-level name of a package.
    #[must_use]
    pub fn lookup_in(&self, pkg: PackageId, name: &str) -> Option<ObjectId> {
        self.package(pkg)?.scope.get(name).copied()
    }

    /// Returns the predeclared type of a basic kind.
    #[must_use]
    pub fn basic(&self, kind: BasicKind) -> TypeId {
        self.basics.get(&kind).copied().unwrap_or(TypeId(0))
    }

    /// Returns the invalid type.
    #[must_use]
    pub fn invalid(&self) -> TypeId {
        self.basic(BasicKind::Invalid)
    }

    /// Registers a package.
    pub fn new_package(&mut self, path: impl Into<String>, name: impl Into<String>) -> PackageId {
        let id = PackageId(index_u32(self.packages.len()));
        self.packages.push(PackageData {
            path: path.into(),
            name: name.into(),
            scope: HashMap::new(),
        });
        id
    }

    /// Declares a package-name object referring to an imported package.
    pub fn new_pkg_name(&mut self, pkg: Option<PackageId>, name: &str, imported: PackageId) -> ObjectId {
        let invalid = self.invalid();
        self.push_object(Object::new(name, ObjectKind::PkgName(imported), invalid, pkg))
    }

    /// Creates `*elem`.
    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.push_type(Type::Pointer(elem))
    }

    /// Creates `[]elem`.
    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.push_type(Type::Slice(elem))
    }

    /// Creates `[len]elem`.
    pub fn array(&mut self, len: u64, elem: TypeId) -> TypeId {
        self.push_type(Type::Array { len, elem })
    }

    /// Creates `map[key]value`.
    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.push_type(Type::Map { key, value })
    }

    /// Creates a channel type.
    pub fn chan(&mut self, dir: ChanDir, elem: TypeId) -> TypeId {
        self.push_type(Type::Chan { dir, elem })
    }

    /// Creates a struct type from field objects and parallel tags.
    pub fn new_struct(&mut self, fields: Vec<ObjectId>, tags: Vec<String>) -> TypeId {
        self.push_type(Type::Struct(Struct { fields, tags }))
    }

    /// Creates an interface type with no methods; see
    /// [`Self::add_interface_method`].
    pub fn new_interface(&mut self, embedded: Vec<TypeId>) -> TypeId {
        self.push_type(Type::Interface(Interface {
            methods: Vec::new(),
            embedded,
        }))
    }

    /// Creates a signature.
    pub fn new_signature(
        &mut self,
        recv: Option<ObjectId>,
        params: Vec<ObjectId>,
        results: Vec<ObjectId>,
        variadic: bool,
    ) -> TypeId {
        self.push_type(Type::Signature(Signature {
            recv,
            params,
            results,
            variadic,
        }))
    }

    /// Creates a variable or parameter.
    pub fn new_var(&mut self, pkg: Option<PackageId>, name: &str, ty: TypeId) -> ObjectId {
        self.push_object(Object::new(name, ObjectKind::Var, ty, pkg))
    }

    /// Creates a package-level variable and declares it in the package scope.
    pub fn new_global(&mut self, pkg: PackageId, name: &str, ty: TypeId) -> ObjectId {
        let id = self.new_var(Some(pkg), name, ty);
        self.declare_in(Some(pkg), name, id);
        id
    }

    /// Creates a struct field.
    pub fn new_field(
        &mut self,
        pkg: Option<PackageId>,
        name: &str,
        ty: TypeId,
        embedded: bool,
    ) -> ObjectId {
        self.push_object(Object::new(name, ObjectKind::Field { embedded }, ty, pkg))
    }

    /// Creates a constant and declares it in the package scope.
    pub fn new_const(&mut self, pkg: Option<PackageId>, name: &str, ty: TypeId) -> ObjectId {
        let id = self.push_object(Object::new(name, ObjectKind::Const, ty, pkg));
        self.declare_in(pkg, name, id);
        id
    }

    /// Creates a function and declares it in the package scope.
    pub fn new_func(&mut self, pkg: Option<PackageId>, name: &str, sig: TypeId) -> ObjectId {
        let id = self.push_object(Object::new(name, ObjectKind::Func, sig, pkg));
        self.declare_in(pkg, name, id);
        id
    }

    /// Creates a defined type with an invalid underlying type.
    ///
    /// Returns the type name object and the named type.
    pub fn new_named(&mut self, pkg: Option<PackageId>, name: &str) -> (ObjectId, TypeId) {
        let ty = TypeId(index_u32(self.types.len()));
        let obj = self.push_object(Object::new(name, ObjectKind::TypeName, ty, pkg));
        let invalid = self.invalid();
        self.push_type(Type::Named(Named {
            obj,
            underlying: invalid,
            methods: Vec::new(),
        }));
        if pkg.is_some() {
            self.declare_in(pkg, name, obj);
        } else {
            self.scope.insert(name.to_owned(), obj);
        }
        (obj, ty)
    }

    /// Sets the underlying type of a defined type.
    pub fn set_underlying(&mut self, named: TypeId, underlying: TypeId) {
        if let Some(Type::Named(data)) = self.types.get_mut(named.index()) {
            data.underlying = underlying;
        }
    }

    /// Declares a method on a defined type.
    ///
    /// The receiver is `named` or, when `pointer_recv` is set, `*named`.
    pub fn add_method(
        &mut self,
        named: TypeId,
        name: &str,
        params: Vec<ObjectId>,
        results: Vec<ObjectId>,
        pointer_recv: bool,
    ) -> ObjectId {
        let recv_ty = if pointer_recv {
            self.pointer(named)
        } else {
            named
        };
        let pkg = self.named_pkg(named);
        let recv = self.new_var(pkg, "", recv_ty);
        let sig = self.new_signature(Some(recv), params, results, false);
        let method = self.push_object(Object::new(name, ObjectKind::Func, sig, pkg));
        if let Some(Type::Named(data)) = self.types.get_mut(named.index()) {
            data.methods.push(method);
        }
        method
    }

    /// Declares a method on an interface, named or literal.
    pub fn add_interface_method(
        &mut self,
        iface: TypeId,
        name: &str,
        params: Vec<ObjectId>,
        results: Vec<ObjectId>,
    ) -> ObjectId {
        let pkg = self.named_pkg(iface);
        let recv = self.new_var(pkg, "", iface);
        let sig = self.new_signature(Some(recv), params, results, false);
        let method = self.push_object(Object::new(name, ObjectKind::Func, sig, pkg));
        let target = self.underlying(iface);
        if let Some(Type::Interface(data)) = self.types.get_mut(target.index()) {
            data.methods.push(method);
        }
        method
    }

    fn named_pkg(&self, ty: TypeId) -> Option<PackageId> {
        match self.ty(ty) {
            Some(Type::Named(named)) => self.object(named.obj).and_then(Object::pkg),
            _ => None,
        }
    }

    /// Returns the underlying type, following defined types.
    #[must_use]
    pub fn underlying(&self, ty: TypeId) -> TypeId {
        let mut current = ty;
        for _ in 0..MAX_DEPTH {
            match self.ty(current) {
                Some(Type::Named(named)) => current = named.underlying,
                _ => return current,
            }
        }
        current
    }

    /// Returns `true` for defined types and predeclared typed basics.
    #[must_use]
    pub fn is_named(&self, ty: TypeId) -> bool {
        match self.ty(ty) {
            Some(Type::Named(_)) => true,
            Some(Type::Basic(kind)) => !kind.is_untyped(),
            _ => false,
        }
    }

    /// Returns `true` when the underlying type is an interface.
    #[must_use]
    pub fn is_interface(&self, ty: TypeId) -> bool {
        matches!(self.ty(self.underlying(ty)), Some(Type::Interface(_)))
    }

    /// Returns the basic kind of the underlying type, if basic.
    #[must_use]
    pub fn basic_kind(&self, ty: TypeId) -> Option<BasicKind> {
        match self.ty(self.underlying(ty)) {
            Some(Type::Basic(kind)) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the pointer base type, if `ty` is a pointer.
    #[must_use]
    pub fn deref(&self, ty: TypeId) -> Option<TypeId> {
        match self.ty(self.underlying(ty)) {
            Some(Type::Pointer(elem)) => Some(*elem),
            _ => None,
        }
    }

    /// Returns the signature of a function type or function object type.
    #[must_use]
    pub fn signature(&self, ty: TypeId) -> Option<&Signature> {
        match self.ty(self.underlying(ty)) {
            Some(Type::Signature(sig)) => Some(sig),
            _ => None,
        }
    }

    /// Returns the receiver type of a method object.
    #[must_use]
    pub fn recv_type(&self, method: ObjectId) -> Option<TypeId> {
        let object = self.object(method)?;
        let recv = self.signature(object.ty())?.recv?;
        self.object(recv).map(Object::ty)
    }

    /// Returns a readable name for a type, for diagnostics.
    #[must_use]
    pub fn type_name(&self, ty: TypeId) -> String {
        match self.ty(ty) {
            Some(Type::Named(named)) => self
                .object(named.obj)
                .map_or_else(|| ty.to_string(), |obj| obj.name().to_owned()),
            Some(Type::Pointer(elem)) => format!("*{}", self.type_name(*elem)),
            Some(Type::Slice(elem)) => format!("[]{}", self.type_name(*elem)),
            Some(Type::Basic(kind)) => format!("{kind:?}").to_lowercase(),
            _ => ty.to_string(),
        }
    }
}

/// Bound on chains of defined types and embedded lookups.
pub(crate) const MAX_DEPTH: usize = 16;

fn index_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
