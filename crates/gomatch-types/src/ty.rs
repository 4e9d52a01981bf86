//! Type representations.

use gomatch_ast::ChanDir;

use crate::object::ObjectId;

/// Handle of a type in a [`crate::Universe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Predeclared basic types, typed and untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    /// The type of erroneous expressions and builtins.
    Invalid,
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32` and `rune`
    Int32,
    /// `int64`
    Int64,
    /// `uint`
    Uint,
    /// `uint8` and `byte`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `uintptr`
    Uintptr,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `complex64`
    Complex64,
    /// `complex128`
    Complex128,
    /// `string`
    String,
    /// `unsafe.Pointer`
    UnsafePointer,
    /// Untyped boolean constant.
    UntypedBool,
    /// Untyped integer constant.
    UntypedInt,
    /// Untyped rune constant.
    UntypedRune,
    /// Untyped floating-point constant.
    UntypedFloat,
    /// Untyped complex constant.
    UntypedComplex,
    /// Untyped string constant.
    UntypedString,
    /// The type of `nil`.
    UntypedNil,
}

impl BasicKind {
    /// Every predeclared typed kind with its universe name.
    pub const NAMED: [(&'static str, Self); 17] = [
        ("bool", Self::Bool),
        ("int", Self::Int),
        ("int8", Self::Int8),
        ("int16", Self::Int16),
        ("int32", Self::Int32),
        ("int64", Self::Int64),
        ("uint", Self::Uint),
        ("uint8", Self::Uint8),
        ("uint16", Self::Uint16),
        ("uint32", Self::Uint32),
        ("uint64", Self::Uint64),
        ("uintptr", Self::Uintptr),
        ("float32", Self::Float32),
        ("float64", Self::Float64),
        ("complex64", Self::Complex64),
        ("complex128", Self::Complex128),
        ("string", Self::String),
    ];

    /// Returns `true` for integer kinds, typed or untyped.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::UntypedInt
                | Self::UntypedRune
        )
    }

    /// Returns `true` for floating-point kinds.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64 | Self::UntypedFloat)
    }

    /// Returns `true` for complex kinds.
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(
            self,
            Self::Complex64 | Self::Complex128 | Self::UntypedComplex
        )
    }

    /// Returns `true` for any numeric kind.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float() || self.is_complex()
    }

    /// Returns `true` for string kinds.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::String | Self::UntypedString)
    }

    /// Returns `true` for boolean kinds.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Bool | Self::UntypedBool)
    }

    /// Returns `true` for the untyped constant kinds and `nil`.
    #[must_use]
    pub const fn is_untyped(self) -> bool {
        matches!(
            self,
            Self::UntypedBool
                | Self::UntypedInt
                | Self::UntypedRune
                | Self::UntypedFloat
                | Self::UntypedComplex
                | Self::UntypedString
                | Self::UntypedNil
        )
    }

    /// Returns the typed kind an untyped constant defaults to.
    #[must_use]
    pub const fn default_kind(self) -> Self {
        match self {
            Self::UntypedBool => Self::Bool,
            Self::UntypedInt => Self::Int,
            Self::UntypedRune => Self::Int32,
            Self::UntypedFloat => Self::Float64,
            Self::UntypedComplex => Self::Complex128,
            Self::UntypedString => Self::String,
            other => other,
        }
    }
}

/// A named (defined) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named {
    /// The declaring type name.
    pub obj: ObjectId,
    /// Underlying type.
    pub underlying: TypeId,
    /// Declared methods.
    pub methods: Vec<ObjectId>,
}

/// A function or method signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    /// Receiver variable, `None` for functions.
    pub recv: Option<ObjectId>,
    /// Parameter variables.
    pub params: Vec<ObjectId>,
    /// Result variables.
    pub results: Vec<ObjectId>,
    /// Whether the last parameter is variadic.
    pub variadic: bool,
}

/// An interface type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    /// Explicitly declared methods.
    pub methods: Vec<ObjectId>,
    /// Embedded interfaces.
    pub embedded: Vec<TypeId>,
}

/// A struct type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Struct {
    /// Field objects in declaration order.
    pub fields: Vec<ObjectId>,
    /// Tags parallel to `fields`, empty when untagged.
    pub tags: Vec<String>,
}

impl Struct {
    /// Returns the tag of the field at `index`.
    #[must_use]
    pub fn tag(&self, index: usize) -> &str {
        self.tags.get(index).map_or("", String::as_str)
    }
}

/// Any type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Predeclared basic type.
    Basic(BasicKind),
    /// Defined type.
    Named(Named),
    /// `*T`
    Pointer(TypeId),
    /// `[]T`
    Slice(TypeId),
    /// `[n]T`
    Array {
        /// Length.
        len: u64,
        /// Element type.
        elem: TypeId,
    },
    /// `map[K]V`
    Map {
        /// Key type.
        key: TypeId,
        /// Value type.
        value: TypeId,
    },
    /// `chan T`
    Chan {
        /// Direction.
        dir: ChanDir,
        /// Element type.
        elem: TypeId,
    },
    /// Function signature.
    Signature(Signature),
    /// Interface.
    Interface(Interface),
    /// Struct.
    Struct(Struct),
    /// Multiple results.
    Tuple(Vec<TypeId>),
}
