//! Borrowed views over tree nodes.
//!
//! [`Node`] is the single currency passed to predicates, stored in binding
//! environments and pushed on ancestor stacks. It covers every node
//! category, every list category and bare tokens, plus [`Node::Nil`] for a
//! missing child.

use crate::id::NodeId;
use crate::node::{
    BasicLit, BlockStmt, CallExpr, Decl, Expr, Field, FieldList, File, FuncType, Ident, Spec, Stmt,
};
use crate::slot::{Seq, Slot, TokenSlot};
use crate::token::Token;

/// The category of a node, list or token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// No node.
    Nil,
    /// Source file.
    File,
    /// Declaration.
    Decl,
    /// Specification.
    Spec,
    /// Statement.
    Stmt,
    /// Expression.
    Expr,
    /// Identifier.
    Ident,
    /// Basic literal.
    BasicLit,
    /// Call expression.
    CallExpr,
    /// Function type.
    FuncType,
    /// Block statement.
    BlockStmt,
    /// Field.
    Field,
    /// Field list.
    FieldList,
    /// Token.
    Token,
    /// List of statements.
    Stmts,
    /// List of expressions.
    Exprs,
    /// List of specifications.
    Specs,
    /// List of identifiers.
    Idents,
    /// List of fields.
    Fields,
    /// List of declarations.
    Decls,
}

impl NodeKind {
    /// Returns a human-readable name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::File => "file",
            Self::Decl => "declaration",
            Self::Spec => "specification",
            Self::Stmt => "statement",
            Self::Expr => "expression",
            Self::Ident => "identifier",
            Self::BasicLit => "literal",
            Self::CallExpr => "call",
            Self::FuncType => "function type",
            Self::BlockStmt => "block",
            Self::Field => "field",
            Self::FieldList => "field list",
            Self::Token => "token",
            Self::Stmts => "statement list",
            Self::Exprs => "expression list",
            Self::Specs => "specification list",
            Self::Idents => "identifier list",
            Self::Fields => "field list entries",
            Self::Decls => "declaration list",
        }
    }

    /// Returns `true` for the ordered-list categories.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::Stmts | Self::Exprs | Self::Specs | Self::Idents | Self::Fields | Self::Decls
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed node, list or token.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A missing child.
    Nil,
    /// Source file.
    File(&'a File),
    /// Declaration.
    Decl(&'a Decl),
    /// Specification.
    Spec(&'a Spec),
    /// Statement.
    Stmt(&'a Stmt),
    /// Expression.
    Expr(&'a Expr),
    /// Identifier in an identifier-typed position.
    Ident(&'a Ident),
    /// Literal in a literal-typed position.
    BasicLit(&'a BasicLit),
    /// Call in a call-typed position.
    CallExpr(&'a CallExpr),
    /// Signature in a signature-typed position.
    FuncType(&'a FuncType),
    /// Block in a block-typed position.
    BlockStmt(&'a BlockStmt),
    /// Field.
    Field(&'a Field),
    /// Field list.
    FieldList(&'a FieldList),
    /// Token value.
    Token(Token),
    /// Statement list or suffix.
    Stmts(&'a [Slot<Stmt>]),
    /// Expression list or suffix.
    Exprs(&'a [Slot<Expr>]),
    /// Specification list.
    Specs(&'a [Slot<Spec>]),
    /// Identifier list.
    Idents(&'a [Slot<Ident>]),
    /// Field entries.
    Fields(&'a [Slot<Field>]),
    /// Declaration list.
    Decls(&'a [Slot<Decl>]),
}

macro_rules! node_from_ref {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Self::$variant(node)
                }
            }

            impl<'a> From<&'a Slot<$ty>> for Node<'a> {
                fn from(slot: &'a Slot<$ty>) -> Self {
                    slot.as_node().map_or(Self::Nil, Self::$variant)
                }
            }
        )*
    };
}

node_from_ref!(
    File => File,
    Decl => Decl,
    Spec => Spec,
    Stmt => Stmt,
    Expr => Expr,
    Ident => Ident,
    BasicLit => BasicLit,
    CallExpr => CallExpr,
    FuncType => FuncType,
    BlockStmt => BlockStmt,
    Field => Field,
    FieldList => FieldList,
);

macro_rules! node_from_seq {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a Seq<$ty>> for Node<'a> {
                fn from(seq: &'a Seq<$ty>) -> Self {
                    Self::$variant(seq.items())
                }
            }

            impl<'a> From<&'a [Slot<$ty>]> for Node<'a> {
                fn from(items: &'a [Slot<$ty>]) -> Self {
                    Self::$variant(items)
                }
            }
        )*
    };
}

node_from_seq!(
    Stmt => Stmts,
    Expr => Exprs,
    Spec => Specs,
    Ident => Idents,
    Field => Fields,
    Decl => Decls,
);

impl From<TokenSlot> for Node<'_> {
    fn from(slot: TokenSlot) -> Self {
        Self::Token(slot.token().unwrap_or_default())
    }
}

impl From<Token> for Node<'_> {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl<'a> Node<'a> {
    /// Returns the node's category.
    #[must_use]
    pub const fn kind(self) -> NodeKind {
        match self {
            Self::Nil => NodeKind::Nil,
            Self::File(_) => NodeKind::File,
            Self::Decl(_) => NodeKind::Decl,
            Self::Spec(_) => NodeKind::Spec,
            Self::Stmt(_) => NodeKind::Stmt,
            Self::Expr(_) => NodeKind::Expr,
            Self::Ident(_) => NodeKind::Ident,
            Self::BasicLit(_) => NodeKind::BasicLit,
            Self::CallExpr(_) => NodeKind::CallExpr,
            Self::FuncType(_) => NodeKind::FuncType,
            Self::BlockStmt(_) => NodeKind::BlockStmt,
            Self::Field(_) => NodeKind::Field,
            Self::FieldList(_) => NodeKind::FieldList,
            Self::Token(_) => NodeKind::Token,
            Self::Stmts(_) => NodeKind::Stmts,
            Self::Exprs(_) => NodeKind::Exprs,
            Self::Specs(_) => NodeKind::Specs,
            Self::Idents(_) => NodeKind::Idents,
            Self::Fields(_) => NodeKind::Fields,
            Self::Decls(_) => NodeKind::Decls,
        }
    }

    /// Returns `true` for the "no node present" sentinel of each category:
    /// a missing child, an empty list, or the `Illegal` token.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        match self {
            Self::Nil | Self::Token(Token::Illegal) => true,
            Self::Stmts(items) => items.is_empty(),
            Self::Exprs(items) => items.is_empty(),
            Self::Specs(items) => items.is_empty(),
            Self::Idents(items) => items.is_empty(),
            Self::Fields(items) => items.is_empty(),
            Self::Decls(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns the identity of an expression-like node.
    #[must_use]
    pub const fn id(self) -> Option<NodeId> {
        match self {
            Self::Expr(expr) => Some(expr.id()),
            Self::Ident(ident) => Some(ident.id),
            Self::BasicLit(lit) => Some(lit.id),
            Self::CallExpr(call) => Some(call.id),
            Self::FuncType(func) => Some(func.id),
            _ => None,
        }
    }

    /// Returns the number of elements of a list view.
    #[must_use]
    pub const fn len(self) -> Option<usize> {
        match self {
            Self::Stmts(items) => Some(items.len()),
            Self::Exprs(items) => Some(items.len()),
            Self::Specs(items) => Some(items.len()),
            Self::Idents(items) => Some(items.len()),
            Self::Fields(items) => Some(items.len()),
            Self::Decls(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Returns the `index`-th element of a list view.
    #[must_use]
    pub fn element(self, index: usize) -> Option<Self> {
        match self {
            Self::Stmts(items) => items.get(index).map(Self::from),
            Self::Exprs(items) => items.get(index).map(Self::from),
            Self::Specs(items) => items.get(index).map(Self::from),
            Self::Idents(items) => items.get(index).map(Self::from),
            Self::Fields(items) => items.get(index).map(Self::from),
            Self::Decls(items) => items.get(index).map(Self::from),
            _ => None,
        }
    }

    /// Returns the expression, seeing through nothing.
    #[must_use]
    pub const fn expr(self) -> Option<&'a Expr> {
        match self {
            Self::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    /// Returns the identifier in either an identifier or expression position.
    #[must_use]
    pub const fn ident(self) -> Option<&'a Ident> {
        match self {
            Self::Ident(ident) | Self::Expr(Expr::Ident(ident)) => Some(ident),
            _ => None,
        }
    }

    /// Returns the literal in either a literal or expression position.
    #[must_use]
    pub const fn basic_lit(self) -> Option<&'a BasicLit> {
        match self {
            Self::BasicLit(lit) | Self::Expr(Expr::BasicLit(lit)) => Some(lit),
            _ => None,
        }
    }

    /// Returns the call in either a call or expression position.
    #[must_use]
    pub const fn call(self) -> Option<&'a CallExpr> {
        match self {
            Self::CallExpr(call) | Self::Expr(Expr::Call(call)) => Some(call),
            _ => None,
        }
    }

    /// Returns the signature in either a signature or expression position.
    #[must_use]
    pub const fn func_type(self) -> Option<&'a FuncType> {
        match self {
            Self::FuncType(func) | Self::Expr(Expr::FuncType(func)) => Some(func),
            _ => None,
        }
    }

    /// Returns the block in either a block or statement position.
    #[must_use]
    pub const fn block(self) -> Option<&'a BlockStmt> {
        match self {
            Self::BlockStmt(block) | Self::Stmt(Stmt::Block(block)) => Some(block),
            _ => None,
        }
    }

    /// Returns the statement.
    #[must_use]
    pub const fn stmt(self) -> Option<&'a Stmt> {
        match self {
            Self::Stmt(stmt) => Some(stmt),
            _ => None,
        }
    }

    /// Returns the declaration.
    #[must_use]
    pub const fn decl(self) -> Option<&'a Decl> {
        match self {
            Self::Decl(decl) => Some(decl),
            _ => None,
        }
    }

    /// Returns the specification.
    #[must_use]
    pub const fn spec(self) -> Option<&'a Spec> {
        match self {
            Self::Spec(spec) => Some(spec),
            _ => None,
        }
    }

    /// Returns the field.
    #[must_use]
    pub const fn field(self) -> Option<&'a Field> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Returns the field list.
    #[must_use]
    pub const fn field_list(self) -> Option<&'a FieldList> {
        match self {
            Self::FieldList(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the file.
    #[must_use]
    pub const fn file(self) -> Option<&'a File> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// Returns the token value.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the expression list.
    #[must_use]
    pub const fn exprs(self) -> Option<&'a [Slot<Expr>]> {
        match self {
            Self::Exprs(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the statement list.
    #[must_use]
    pub const fn stmts(self) -> Option<&'a [Slot<Stmt>]> {
        match self {
            Self::Stmts(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` when both views borrow the same node.
    ///
    /// Lists compare by address and length, tokens by value.
    #[must_use]
    pub fn same(self, other: Self) -> bool {
        use std::ptr;
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::File(a), Self::File(b)) => ptr::eq(a, b),
            (Self::Decl(a), Self::Decl(b)) => ptr::eq(a, b),
            (Self::Spec(a), Self::Spec(b)) => ptr::eq(a, b),
            (Self::Stmt(a), Self::Stmt(b)) => ptr::eq(a, b),
            (Self::Expr(a), Self::Expr(b)) => ptr::eq(a, b),
            (Self::Ident(a), Self::Ident(b)) => ptr::eq(a, b),
            (Self::BasicLit(a), Self::BasicLit(b)) => ptr::eq(a, b),
            (Self::CallExpr(a), Self::CallExpr(b)) => ptr::eq(a, b),
            (Self::FuncType(a), Self::FuncType(b)) => ptr::eq(a, b),
            (Self::BlockStmt(a), Self::BlockStmt(b)) => ptr::eq(a, b),
            (Self::Field(a), Self::Field(b)) => ptr::eq(a, b),
            (Self::FieldList(a), Self::FieldList(b)) => ptr::eq(a, b),
            (Self::Token(a), Self::Token(b)) => a == b,
            (Self::Stmts(a), Self::Stmts(b)) => ptr::eq(a, b),
            (Self::Exprs(a), Self::Exprs(b)) => ptr::eq(a, b),
            (Self::Specs(a), Self::Specs(b)) => ptr::eq(a, b),
            (Self::Idents(a), Self::Idents(b)) => ptr::eq(a, b),
            (Self::Fields(a), Self::Fields(b)) => ptr::eq(a, b),
            (Self::Decls(a), Self::Decls(b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}
