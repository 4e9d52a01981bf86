//! Selector and object predicates.

use gomatch_ast::{Expr, Node, SelectorExpr};
use gomatch_types::{Object, ObjectId, ObjectKind, PackageId, Struct, Type};

use super::ident::ident_object_of;
use crate::matcher::{MatchContext, Matcher};
use crate::pattern::{ExprPattern, Syntax};

/// Matches a selector expression `x.sel` satisfying `predicate`.
pub fn selector_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, &SelectorExpr) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| match node.expr() {
        Some(Expr::Selector(selector)) => predicate(ctx, selector),
        _ => false,
    })
}

/// Matches a selector whose selected name resolves to an object
/// satisfying `predicate`.
pub fn selector_object_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    selector_of(m, move |ctx, selector| {
        selector
            .sel
            .as_node()
            .and_then(|sel| ctx.oracle().object_of(sel))
            .is_some_and(|obj| predicate(ctx, obj))
    })
}

/// Matches a qualified identifier `pkg.Name` whose package satisfies
/// `predicate`.
///
/// The operand must be a package name; the selected name is left open,
/// so the result is a fragment that callers may refine.
pub fn selector_pkg_of(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, PackageId) -> bool + 'static,
) -> SelectorExpr {
    SelectorExpr {
        x: ident_object_of(m, move |ctx, obj| {
            let universe = ctx.oracle().universe();
            match universe.object(obj).map(Object::kind) {
                Some(ObjectKind::PkgName(pkg)) => predicate(ctx, pkg),
                _ => false,
            }
        }),
        ..SelectorExpr::default()
    }
}

/// Matches a struct field selection `x.f` where the operand's type has a
/// struct underlying type satisfying `struct_predicate` and the field
/// satisfies `field_predicate`.
///
/// Operands of pointer type do not match.
pub fn selector_field_of(
    m: &mut Matcher,
    struct_predicate: impl Fn(&mut MatchContext<'_>, &Struct) -> bool + 'static,
    field_predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> ExprPattern {
    selector_of(m, move |ctx, selector| {
        let universe = ctx.oracle().universe();
        let Some(operand) = ctx.type_of(Node::from(&selector.x)) else {
            return false;
        };
        let Some(Type::Struct(fields)) = universe.ty(universe.underlying(operand)) else {
            return false;
        };
        if !struct_predicate(ctx, fields) {
            return false;
        }
        let field = selector
            .sel
            .as_node()
            .and_then(|sel| ctx.oracle().object_of(sel))
            .filter(|&obj| {
                universe
                    .object(obj)
                    .is_some_and(|object| matches!(object.kind(), ObjectKind::Field { .. }))
            });
        field.is_some_and(|obj| field_predicate(ctx, obj))
    })
}

/// Matches an identifier or selector resolving to an object satisfying
/// `predicate`.
///
/// Explicitly instantiated generic names (`f[int]`) do not resolve here;
/// match their calls with the callee predicates instead.
pub fn object_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, ObjectId) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| ctx.object_of(node).is_some_and(|obj| predicate(ctx, obj)))
}
