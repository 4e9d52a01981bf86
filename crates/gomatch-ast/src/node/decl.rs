//! Declarations, specifications, fields and files.

use crate::node::{BasicLit, BlockStmt, Expr, FuncType, Ident};
use crate::slot::{Seq, Slot, TokenSlot};

/// `import`, `const`, `type` or `var` declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenDecl {
    /// Declaration keyword.
    pub tok: TokenSlot,
    /// Specifications.
    pub specs: Seq<Spec>,
}

/// A function or method declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuncDecl {
    /// Receiver, nil for plain functions.
    pub recv: Slot<FieldList>,
    /// Function name.
    pub name: Slot<Ident>,
    /// Signature.
    pub ty: Slot<FuncType>,
    /// Body, nil for external functions.
    pub body: Slot<BlockStmt>,
}

impl FuncDecl {
    /// Returns `true` when the declaration has a receiver.
    #[must_use]
    pub fn is_method(&self) -> bool {
        self.recv
            .as_node()
            .is_some_and(|recv| recv.list.items().iter().any(|field| !field.is_nil()))
    }
}

/// Any declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `import`/`const`/`type`/`var`
    Gen(GenDecl),
    /// `func`
    Func(FuncDecl),
}

/// A single import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSpec {
    /// Local name, nil when not renamed.
    pub name: Slot<Ident>,
    /// Import path literal.
    pub path: Slot<BasicLit>,
}

/// A `const` or `var` specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSpec {
    /// Declared names.
    pub names: Seq<Ident>,
    /// Declared type.
    pub ty: Slot<Expr>,
    /// Initial values.
    pub values: Seq<Expr>,
}

/// A type specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSpec {
    /// Type name.
    pub name: Slot<Ident>,
    /// Type parameters.
    pub type_params: Slot<FieldList>,
    /// Whether this is an alias declaration.
    pub alias: bool,
    /// Defined type.
    pub ty: Slot<Expr>,
}

/// Any specification.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    /// Import specification.
    Import(ImportSpec),
    /// Constant or variable specification.
    Value(ValueSpec),
    /// Type specification.
    Type(TypeSpec),
}

/// A struct field, parameter, result or interface method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    /// Names, empty for anonymous fields.
    pub names: Seq<Ident>,
    /// Field type.
    pub ty: Slot<Expr>,
    /// Struct tag.
    pub tag: Slot<BasicLit>,
}

/// A parenthesized or braced list of fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldList {
    /// Fields.
    pub list: Seq<Field>,
}

impl FieldList {
    /// Counts the declared entries, expanding grouped names.
    #[must_use]
    pub fn num_fields(&self) -> usize {
        self.list
            .nodes()
            .map(|field| field.names.items().len().max(1))
            .sum()
    }
}

/// A source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    /// Package name.
    pub name: Slot<Ident>,
    /// Top-level declarations.
    pub decls: Seq<Decl>,
}
