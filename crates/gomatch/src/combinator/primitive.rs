//! Kind-agnostic combinators.
//!
//! Composition evaluates operands left to right and stops at the deciding
//! one, so bindings made by an operand that never ran do not exist.

use crate::matcher::Matcher;
use crate::pattern::Syntax;

/// Matches anything, including a missing node.
pub fn wildcard<P: Syntax>(m: &mut Matcher) -> P {
    m.pattern(|_, _| true)
}

/// Matches only the "no node" sentinel of the position: a missing child,
/// an empty list or the `Illegal` token.
///
/// A `Nil` slot already matches anything; use this to require absence,
/// such as a function without a receiver.
pub fn absent<P: Syntax>(m: &mut Matcher) -> P {
    m.pattern(|node, _| node.is_absent())
}

/// Matches what `inner` matches and binds the candidate to `name`.
pub fn bind<P: Syntax>(m: &mut Matcher, name: impl Into<String>, inner: P) -> P {
    let key = name.into();
    m.pattern(move |node, ctx| {
        if !inner.matches(node, ctx) {
            return false;
        }
        ctx.bind(&key, node);
        true
    })
}

/// Matches a candidate whose subtree, the candidate included, contains a
/// match for `target`.
///
/// `target` may be of another kind than the position: an expression
/// pattern can ask whether a statement contains a call.
pub fn contains<P: Syntax, Q: Syntax>(m: &mut Matcher, target: Q) -> P {
    m.pattern(move |node, ctx| ctx.any_match(&target, node))
}

/// Alias of [`contains`].
pub fn any<P: Syntax, Q: Syntax>(m: &mut Matcher, target: Q) -> P {
    contains(m, target)
}

/// Negates a pattern.
pub fn not<P: Syntax>(m: &mut Matcher, inner: P) -> P {
    m.pattern(move |node, ctx| !inner.matches(node, ctx))
}

/// Matches when both operands match.
pub fn and<P: Syntax>(m: &mut Matcher, lhs: P, rhs: P) -> P {
    m.pattern(move |node, ctx| lhs.matches(node, ctx) && rhs.matches(node, ctx))
}

/// Matches when either operand matches.
pub fn or<P: Syntax>(m: &mut Matcher, lhs: P, rhs: P) -> P {
    m.pattern(move |node, ctx| lhs.matches(node, ctx) || rhs.matches(node, ctx))
}

/// Matches when every operand matches. No operands match anything.
pub fn and_all<P: Syntax>(m: &mut Matcher, operands: Vec<P>) -> P {
    m.pattern(move |node, ctx| operands.iter().all(|operand| operand.matches(node, ctx)))
}

/// Matches when some operand matches. No operands match nothing.
pub fn or_any<P: Syntax>(m: &mut Matcher, operands: Vec<P>) -> P {
    m.pattern(move |node, ctx| operands.iter().any(|operand| operand.matches(node, ctx)))
}

/// Reuses a pattern of one position type in another.
///
/// The typical use is a `CallExpr` fragment in an expression position:
/// the fragment is compared against whatever the expression slot holds.
pub fn pattern_of<P: Syntax, Q: Syntax>(m: &mut Matcher, fragment: Q) -> P {
    m.pattern(move |node, ctx| fragment.matches(node, ctx))
}
