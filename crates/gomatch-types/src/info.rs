//! Per-node facts recorded by a type checker.

use std::collections::HashMap;

use gomatch_ast::NodeId;

use crate::object::ObjectId;
use crate::ty::TypeId;

/// How an expression may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The expression failed to check.
    #[default]
    Invalid,
    /// A call without results.
    NoValue,
    /// A builtin function name.
    Builtin,
    /// A type expression.
    TypeExpr,
    /// A constant.
    Constant,
    /// An addressable variable.
    Variable,
    /// A map index expression.
    MapIndex,
    /// Any other value.
    Value,
    /// A value with an optional second boolean result.
    CommaOk,
}

/// The type and mode of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeAndValue {
    /// How the expression may be used.
    pub mode: Mode,
    /// The expression's type.
    pub ty: TypeId,
}

impl TypeAndValue {
    /// Creates an entry.
    #[must_use]
    pub const fn new(mode: Mode, ty: TypeId) -> Self {
        Self { mode, ty }
    }

    /// Returns `true` for type expressions.
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(self.mode, Mode::TypeExpr)
    }

    /// Returns `true` for builtin names.
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        matches!(self.mode, Mode::Builtin)
    }

    /// Returns `true` for expressions that produce a value.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(
            self.mode,
            Mode::Constant | Mode::Variable | Mode::MapIndex | Mode::Value | Mode::CommaOk
        )
    }

    /// Returns `true` for addressable expressions.
    #[must_use]
    pub const fn addressable(self) -> bool {
        matches!(self.mode, Mode::Variable)
    }
}

/// What a selector expression selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// `x.f` is a struct field.
    FieldVal,
    /// `x.m` is a method value.
    MethodVal,
    /// `T.m` is a method expression.
    MethodExpr,
}

/// A resolved selector expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// What is selected.
    pub kind: SelectionKind,
    /// Type of `x` in `x.f`.
    pub recv: TypeId,
    /// The field or method.
    pub obj: ObjectId,
    /// Embedding path from the receiver to the member.
    pub index: Vec<usize>,
    /// Whether a pointer indirection was needed.
    pub indirect: bool,
}

/// Facts about one syntax tree, keyed by node identity.
#[derive(Debug, Clone, Default)]
pub struct Info {
    /// Identifiers that declare an object.
    pub defs: HashMap<NodeId, ObjectId>,
    /// Identifiers that refer to an object.
    pub uses: HashMap<NodeId, ObjectId>,
    /// Types of expressions.
    pub types: HashMap<NodeId, TypeAndValue>,
    /// Resolved selector expressions.
    pub selections: HashMap<NodeId, Selection>,
}
