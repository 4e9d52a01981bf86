//! Declaration fragments.

use gomatch_ast::{Decl, Expr, FuncDecl, Slot, Token, TokenSlot, UnaryExpr};
use gomatch_types::ObjectId;

use super::ident::{ident_name_of, ident_object_of, ident_sig_of};
use super::primitive::and;
use crate::matcher::{MatchContext, Matcher};
use crate::pattern::{DeclPattern, ExprPattern};

/// Matches a function or method declaration whose declared object
/// satisfies `predicate`.
pub fn func_decl_of(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> DeclPattern {
    let name = ident_object_of(m, move |ctx, obj| {
        let is_func = ctx
            .oracle()
            .universe()
            .object(obj)
            .is_some_and(gomatch_types::Object::is_func);
        is_func && predicate(ctx, obj)
    });
    Slot::node(Decl::Func(FuncDecl {
        name,
        ..FuncDecl::default()
    }))
}

/// Matches the declaration of a package initialiser, `func init()`.
pub fn init_func(m: &mut Matcher) -> DeclPattern {
    let named = ident_name_of(m, "init");
    let niladic = ident_sig_of(m, |_, sig| {
        sig.recv.is_none() && sig.params.is_empty() && sig.results.is_empty()
    });
    Slot::node(Decl::Func(FuncDecl {
        name: and(m, named, niladic),
        ..FuncDecl::default()
    }))
}

/// Builds the fragment `&x`.
#[must_use]
pub fn ptr_of(x: ExprPattern) -> ExprPattern {
    Slot::node(Expr::Unary(UnaryExpr {
        op: TokenSlot::Token(Token::And),
        x,
        ..UnaryExpr::default()
    }))
}
