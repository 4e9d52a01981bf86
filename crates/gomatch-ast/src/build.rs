//! Constructors for real trees.
//!
//! Every expression-like node built here receives a fresh [`NodeId`], so
//! front ends can attach semantic metadata to it. Pattern fragments are
//! written as plain struct literals instead and keep the default id.

use crate::id::NodeId;
use crate::literal::LitKind;
use crate::node::{
    AssignStmt, BasicLit, BinaryExpr, BlockStmt, CallExpr, CompositeLit, Decl, Expr, ExprStmt,
    Field, FieldList, File, FuncDecl, FuncLit, FuncType, GenDecl, Ident, ImportSpec, IndexExpr,
    ParenExpr, ReturnStmt, SelectorExpr, SliceExpr, Spec, StarExpr, Stmt, UnaryExpr, ValueSpec,
};
use crate::slot::{Seq, Slot};
use crate::token::Token;

/// An identifier with a fresh id.
#[must_use]
pub fn ident(name: impl Into<String>) -> Ident {
    Ident {
        id: NodeId::fresh(),
        name: name.into(),
    }
}

/// An identifier expression with a fresh id.
#[must_use]
pub fn ident_expr(name: impl Into<String>) -> Expr {
    Expr::Ident(ident(name))
}

/// A basic literal with a fresh id.
#[must_use]
pub fn lit(kind: LitKind, value: impl Into<String>) -> BasicLit {
    BasicLit {
        id: NodeId::fresh(),
        kind,
        value: value.into(),
    }
}

/// An integer literal expression.
#[must_use]
pub fn int(value: impl Into<String>) -> Expr {
    Expr::BasicLit(lit(LitKind::Int, value))
}

/// A string literal expression from unquoted text.
#[must_use]
pub fn string(value: &str) -> Expr {
    Expr::BasicLit(lit(LitKind::String, format!("{value:?}")))
}

/// A call `fun(args...)`.
#[must_use]
pub fn call(fun: impl Into<Expr>, args: Vec<Expr>) -> CallExpr {
    CallExpr {
        id: NodeId::fresh(),
        fun: Slot::node(fun.into()),
        args: Seq::from(args),
        ellipsis: false,
    }
}

/// A call whose last argument is spread with `...`.
#[must_use]
pub fn call_spread(fun: impl Into<Expr>, args: Vec<Expr>) -> CallExpr {
    CallExpr {
        ellipsis: true,
        ..call(fun, args)
    }
}

/// A selector `x.sel`.
#[must_use]
pub fn selector(x: impl Into<Expr>, sel: impl Into<String>) -> SelectorExpr {
    SelectorExpr {
        id: NodeId::fresh(),
        x: Slot::node(x.into()),
        sel: Slot::node(ident(sel)),
    }
}

/// A parenthesized expression.
#[must_use]
pub fn paren(x: impl Into<Expr>) -> Expr {
    Expr::Paren(ParenExpr {
        id: NodeId::fresh(),
        x: Slot::node(x.into()),
    })
}

/// A unary expression.
#[must_use]
pub fn unary(op: Token, x: impl Into<Expr>) -> Expr {
    Expr::Unary(UnaryExpr {
        id: NodeId::fresh(),
        op: op.into(),
        x: Slot::node(x.into()),
    })
}

/// A binary expression.
#[must_use]
pub fn binary(x: impl Into<Expr>, op: Token, y: impl Into<Expr>) -> Expr {
    Expr::Binary(BinaryExpr {
        id: NodeId::fresh(),
        x: Slot::node(x.into()),
        op: op.into(),
        y: Slot::node(y.into()),
    })
}

/// A pointer type or dereference `*x`.
#[must_use]
pub fn star(x: impl Into<Expr>) -> Expr {
    Expr::Star(StarExpr {
        id: NodeId::fresh(),
        x: Slot::node(x.into()),
    })
}

/// An index expression `x[index]`.
#[must_use]
pub fn index(x: impl Into<Expr>, index: impl Into<Expr>) -> Expr {
    Expr::Index(IndexExpr {
        id: NodeId::fresh(),
        x: Slot::node(x.into()),
        index: Slot::node(index.into()),
    })
}

/// A two-index slice expression `x[low:high]`; `None` bounds are omitted.
#[must_use]
pub fn slice(x: impl Into<Expr>, low: Option<Expr>, high: Option<Expr>) -> Expr {
    Expr::Slice(SliceExpr {
        id: NodeId::fresh(),
        x: Slot::node(x.into()),
        low: low.map_or(Slot::Nil, Slot::node),
        high: high.map_or(Slot::Nil, Slot::node),
        max: Slot::Nil,
        slice3: false,
    })
}

/// A composite literal `ty{elts...}`.
#[must_use]
pub fn composite(ty: impl Into<Expr>, elts: Vec<Expr>) -> Expr {
    Expr::CompositeLit(CompositeLit {
        id: NodeId::fresh(),
        ty: Slot::node(ty.into()),
        elts: Seq::from(elts),
    })
}

/// A function literal.
#[must_use]
pub fn func_lit(ty: FuncType, body: Vec<Stmt>) -> Expr {
    Expr::FuncLit(FuncLit {
        id: NodeId::fresh(),
        ty: Slot::node(ty),
        body: Slot::node(block(body)),
    })
}

/// An expression statement.
#[must_use]
pub fn expr_stmt(x: impl Into<Expr>) -> Stmt {
    Stmt::Expr(ExprStmt {
        x: Slot::node(x.into()),
    })
}

/// An assignment `lhs tok rhs`.
#[must_use]
pub fn assign(lhs: Vec<Expr>, tok: Token, rhs: Vec<Expr>) -> Stmt {
    Stmt::Assign(AssignStmt {
        lhs: Seq::from(lhs),
        tok: tok.into(),
        rhs: Seq::from(rhs),
    })
}

/// A return statement.
#[must_use]
pub fn ret(results: Vec<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt {
        results: Seq::from(results),
    })
}

/// A block of statements.
#[must_use]
pub fn block(list: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        list: Seq::from(list),
    }
}

/// A field `names ty`.
#[must_use]
pub fn field(names: &[&str], ty: impl Into<Expr>) -> Field {
    Field {
        names: names.iter().map(|name| ident(*name)).collect(),
        ty: Slot::node(ty.into()),
        tag: Slot::Nil,
    }
}

/// A field list.
#[must_use]
pub fn fields(list: Vec<Field>) -> FieldList {
    FieldList {
        list: Seq::from(list),
    }
}

/// A signature with parameters and results.
#[must_use]
pub fn func_type(params: Vec<Field>, results: Vec<Field>) -> FuncType {
    FuncType {
        id: NodeId::fresh(),
        type_params: Slot::Nil,
        params: Slot::node(fields(params)),
        results: if results.is_empty() {
            Slot::Nil
        } else {
            Slot::node(fields(results))
        },
    }
}

/// A function declaration.
#[must_use]
pub fn func_decl(name: Ident, ty: FuncType, body: Vec<Stmt>) -> Decl {
    Decl::Func(FuncDecl {
        recv: Slot::Nil,
        name: Slot::node(name),
        ty: Slot::node(ty),
        body: Slot::node(block(body)),
    })
}

/// A method declaration with a single receiver field.
#[must_use]
pub fn method_decl(recv: Field, name: Ident, ty: FuncType, body: Vec<Stmt>) -> Decl {
    Decl::Func(FuncDecl {
        recv: Slot::node(fields(vec![recv])),
        name: Slot::node(name),
        ty: Slot::node(ty),
        body: Slot::node(block(body)),
    })
}

/// A single-spec `var` declaration.
#[must_use]
pub fn var_decl(names: Vec<Ident>, ty: Option<Expr>, values: Vec<Expr>) -> Decl {
    Decl::Gen(GenDecl {
        tok: Token::Var.into(),
        specs: Seq::from(vec![Spec::Value(ValueSpec {
            names: Seq::from(names),
            ty: ty.map_or(Slot::Nil, Slot::node),
            values: Seq::from(values),
        })]),
    })
}

/// An import declaration of the given paths.
#[must_use]
pub fn imports(paths: &[&str]) -> Decl {
    Decl::Gen(GenDecl {
        tok: Token::Import.into(),
        specs: paths
            .iter()
            .map(|path| {
                Spec::Import(ImportSpec {
                    name: Slot::Nil,
                    path: Slot::node(lit(LitKind::String, format!("{path:?}"))),
                })
            })
            .collect(),
    })
}

/// A source file.
#[must_use]
pub fn file(package: impl Into<String>, decls: Vec<Decl>) -> File {
    File {
        name: Slot::node(ident(package)),
        decls: Seq::from(decls),
    }
}
