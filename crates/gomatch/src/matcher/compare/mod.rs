//! Structural comparison, one [`Shape`] implementation per node type.
//!
//! Each comparator matches exhaustively over its node's variants, so a
//! variant added to the tree model without a comparison arm is a compile
//! error. Children are compared conjunctively, left to right, in grammar
//! order; the first mismatch stops the comparison and later children are
//! not visited, so their predicates do not run.

use gomatch_ast::{Node, Seq, Slot, TokenSlot};

use crate::matcher::MatchContext;
use crate::pattern::{Element, Shape, Syntax};

/// Narrows a candidate to one variant of a category, or fails the
/// comparison.
macro_rules! narrow {
    ($node:expr, $category:ident :: $variant:ident) => {
        match $node {
            Node::$category($category::$variant(inner)) => inner,
            _ => return false,
        }
    };
}

mod decl;
mod expr;
mod stmt;

fn slot<'a, T: Shape>(pattern: &Slot<T>, candidate: &'a Slot<T>, ctx: &mut MatchContext<'a>) -> bool {
    pattern.matches(T::view(candidate), ctx)
}

fn seq<'a, T: Element>(pattern: &Seq<T>, candidate: &'a Seq<T>, ctx: &mut MatchContext<'a>) -> bool {
    pattern.matches(T::list_view(candidate.items()), ctx)
}

fn token(pattern: &TokenSlot, candidate: TokenSlot, ctx: &mut MatchContext<'_>) -> bool {
    pattern.matches(Node::from(candidate), ctx)
}
