//! Literal predicates.
//!
//! A concrete `BasicLit` fragment already matches by value; these
//! combinators cover the cases a single value cannot express, such as
//! "any integer literal" or "a string with this prefix".

use gomatch_ast::{BasicLit, LitKind, LitValue, Node};

use super::tag::StructTag;
use crate::matcher::{MatchContext, Matcher};
use crate::pattern::{BasicLitPattern, Syntax};

fn literal(node: Node<'_>, kind: LitKind) -> Option<&BasicLit> {
    node.basic_lit().filter(|lit| lit.kind == kind)
}

/// Matches any literal of `kind`.
pub fn lit_kind_of<P: Syntax>(m: &mut Matcher, kind: LitKind) -> P {
    m.pattern(move |node, _| literal(node, kind).is_some())
}

/// Matches a literal of `kind` whose parsed value satisfies `predicate`.
///
/// Malformed literals never match.
pub fn lit_of<P: Syntax>(
    m: &mut Matcher,
    kind: LitKind,
    predicate: impl Fn(&mut MatchContext<'_>, &LitValue) -> bool + 'static,
) -> P {
    m.pattern(move |node, ctx| {
        literal(node, kind)
            .and_then(BasicLit::parsed)
            .is_some_and(|value| predicate(ctx, &value))
    })
}

/// Matches an integer literal whose value satisfies `predicate`.
pub fn lit_int_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, &LitValue) -> bool + 'static,
) -> P {
    lit_of(m, LitKind::Int, predicate)
}

/// Matches a string literal whose value satisfies `predicate`.
pub fn lit_string_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, &LitValue) -> bool + 'static,
) -> P {
    lit_of(m, LitKind::String, predicate)
}

/// Matches a string literal whose unquoted contents satisfy `predicate`.
///
/// Contents that are not valid UTF-8 never match.
pub fn lit_string_value_of<P: Syntax>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, &str) -> bool + 'static,
) -> P {
    lit_string_of(m, move |ctx, value| {
        value.as_str().is_some_and(|text| predicate(ctx, text))
    })
}

/// Matches a struct field tag.
///
/// An untagged field shows `None` to the predicate; a tag that is not a
/// valid UTF-8 string literal never matches.
pub fn tag_of(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, Option<&StructTag>) -> bool + 'static,
) -> BasicLitPattern {
    m.pattern(move |node, ctx| {
        if matches!(node, Node::Nil) {
            return predicate(ctx, None);
        }
        literal(node, LitKind::String)
            .and_then(BasicLit::parsed)
            .and_then(|value| value.as_str().map(StructTag::new))
            .is_some_and(|tag| predicate(ctx, Some(&tag)))
    })
}
