//! Declared entities.

use crate::ty::TypeId;
use crate::universe::PackageId;

/// Handle of an object in a [`crate::Universe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

/// What an object denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A predeclared builtin function such as `append`.
    Builtin,
    /// A function or method.
    Func,
    /// A variable or parameter.
    Var,
    /// A struct field.
    Field {
        /// Whether the field is embedded.
        embedded: bool,
    },
    /// A constant.
    Const,
    /// A type name.
    TypeName,
    /// An imported package name.
    PkgName(PackageId),
    /// The predeclared `nil`.
    Nil,
    /// A statement label.
    Label,
}

/// A named language entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    name: String,
    kind: ObjectKind,
    ty: TypeId,
    pkg: Option<PackageId>,
}

impl Object {
    pub(crate) fn new(
        name: impl Into<String>,
        kind: ObjectKind,
        ty: TypeId,
        pkg: Option<PackageId>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            pkg,
        }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns what the object denotes.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the object's type; builtins have the invalid type.
    #[must_use]
    pub const fn ty(&self) -> TypeId {
        self.ty
    }

    /// Returns the declaring package, `None` for universe objects.
    #[must_use]
    pub const fn pkg(&self) -> Option<PackageId> {
        self.pkg
    }

    /// Returns `true` for functions and methods.
    #[must_use]
    pub const fn is_func(&self) -> bool {
        matches!(self.kind, ObjectKind::Func)
    }

    /// Returns `true` for builtin functions.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self.kind, ObjectKind::Builtin)
    }

    /// Returns `true` for variables, parameters and fields.
    #[must_use]
    pub const fn is_var(&self) -> bool {
        matches!(self.kind, ObjectKind::Var | ObjectKind::Field { .. })
    }

    /// Returns `true` for type names.
    #[must_use]
    pub const fn is_type_name(&self) -> bool {
        matches!(self.kind, ObjectKind::TypeName)
    }
}
