//! List predicates.

use gomatch_ast::Seq;

use crate::matcher::{MatchContext, Matcher};
use crate::pattern::{Element, Syntax};

/// Matches a list with an element whose subtree contains a match for
/// `target`.
pub fn list_contains<T: Element, Q: Syntax>(m: &mut Matcher, target: Q) -> Seq<T> {
    m.pattern(move |node, ctx| {
        T::list(node).is_some_and(|items| {
            items
                .iter()
                .any(|item| ctx.any_match(&target, T::view(item)))
        })
    })
}

/// Matches a list whose length satisfies `predicate`.
pub fn len_of<T: Element>(
    m: &mut Matcher,
    predicate: impl Fn(&mut MatchContext<'_>, usize) -> bool + 'static,
) -> Seq<T> {
    m.pattern(move |node, ctx| node.len().is_some_and(|len| predicate(ctx, len)))
}

/// Matches a list of exactly `n` elements.
pub fn len_eq<T: Element>(m: &mut Matcher, n: usize) -> Seq<T> {
    len_of(m, move |_, len| len == n)
}

/// Matches a list of more than `n` elements.
pub fn len_gt<T: Element>(m: &mut Matcher, n: usize) -> Seq<T> {
    len_of(m, move |_, len| len > n)
}

/// Matches a list of at least `n` elements.
pub fn len_ge<T: Element>(m: &mut Matcher, n: usize) -> Seq<T> {
    len_of(m, move |_, len| len >= n)
}

/// Matches a list of fewer than `n` elements.
pub fn len_lt<T: Element>(m: &mut Matcher, n: usize) -> Seq<T> {
    len_of(m, move |_, len| len < n)
}

/// Matches a list of at most `n` elements.
pub fn len_le<T: Element>(m: &mut Matcher, n: usize) -> Seq<T> {
    len_of(m, move |_, len| len <= n)
}
