//! Type relation predicates.

use gomatch_ast::{BasicLit, CallExpr, Expr, FuncType, Ident, Node, Slot};
use gomatch_types::{TypeId, Universe};
use tracing::debug;

use super::SEMANTIC_TARGET;
use crate::error::PatternError;
use crate::matcher::{MatchContext, Matcher};
use crate::pattern::Syntax;

/// Positions holding expressions, whose candidates have a type.
pub trait Typed: Syntax {}

impl Typed for Slot<Expr> {}
impl Typed for Slot<Ident> {}
impl Typed for Slot<BasicLit> {}
impl Typed for Slot<CallExpr> {}
impl Typed for Slot<FuncType> {}

/// Matches an expression whose recorded type satisfies `predicate`.
///
/// Missing expressions, such as the absent type of `const x = 1`, and
/// expressions without type information do not match.
pub fn type_of<P: Typed>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, TypeId) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| {
        if matches!(node, Node::Nil) {
            return false;
        }
        ctx.type_of(node).is_some_and(|ty| predicate(ctx, ty))
    })
}

/// Matches an expression whose type is identical to `target`.
pub fn type_identical<P: Typed>(m: &mut Matcher, target: TypeId) -> P {
    type_of(m, move |ctx, ty| ctx.oracle().universe().identical(ty, target))
}

/// Like [`type_identical`], ignoring struct tags.
pub fn type_identical_ignore_tags<P: Typed>(m: &mut Matcher, target: TypeId) -> P {
    type_of(m, move |ctx, ty| {
        ctx.oracle().universe().identical_ignore_tags(ty, target)
    })
}

/// Matches an expression whose value is assignable to `target`.
pub fn type_assignable_to<P: Typed>(m: &mut Matcher, target: TypeId) -> P {
    type_of(m, move |ctx, ty| ctx.oracle().universe().assignable(ty, target))
}

/// Matches an expression whose value converts to `target`.
pub fn type_convertible_to<P: Typed>(m: &mut Matcher, target: TypeId) -> P {
    type_of(m, move |ctx, ty| ctx.oracle().universe().convertible(ty, target))
}

/// Matches an expression whose type implements the interface `iface`.
///
/// # Errors
///
/// Returns [`PatternError::NotAnInterface`] when `iface` is not an
/// interface type in `universe`.
pub fn type_implements<P: Typed>(
    m: &mut Matcher,
    universe: &Universe,
    iface: TypeId,
) -> Result<P, PatternError> {
    require_interface(universe, iface)?;
    Ok(type_of(m, move |ctx, ty| {
        ctx.oracle().universe().implements(ty, iface)
    }))
}

/// Matches an expression `x` such that `*x`'s type implements `iface`,
/// letting methods with pointer receivers count.
///
/// # Errors
///
/// Returns [`PatternError::NotAnInterface`] when `iface` is not an
/// interface type in `universe`.
pub fn type_ptr_implements<P: Typed>(
    m: &mut Matcher,
    universe: &Universe,
    iface: TypeId,
) -> Result<P, PatternError> {
    require_interface(universe, iface)?;
    Ok(type_of(m, move |ctx, ty| {
        ctx.oracle().universe().pointer_implements(ty, iface)
    }))
}

fn require_interface(universe: &Universe, iface: TypeId) -> Result<(), PatternError> {
    if universe.is_interface(iface) {
        return Ok(());
    }
    let name = universe.type_name(iface);
    debug!(target: SEMANTIC_TARGET, ty = %name, "expected an interface type");
    Err(PatternError::not_an_interface(name))
}
