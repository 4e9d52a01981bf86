//! [`Syntax`] for the position types and [`Element`] for list members.

use gomatch_ast::{Decl, Expr, Field, Hole, Ident, Node, NodeKind, Seq, Slot, Spec, Stmt, TokenSlot};

use crate::matcher::MatchContext;
use crate::pattern::{Element, Shape, Syntax};

impl<T: Shape> Syntax for Slot<T> {
    const KIND: NodeKind = T::KIND;

    fn from_hole(hole: Hole) -> Self {
        Self::Hole(hole)
    }

    fn hole(&self) -> Option<Hole> {
        match self {
            Self::Hole(hole) => Some(*hole),
            Self::Nil | Self::Node(_) => None,
        }
    }

    fn accepts(node: Node<'_>) -> bool {
        T::accepts(node)
    }

    fn matches<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        let config = ctx.config();
        let candidate = T::normalize_node(node, config);
        match T::normalize(self, config) {
            Self::Nil => true,
            Self::Hole(hole) => {
                // A missing child is shown to the predicate so it can
                // assert absence.
                (matches!(candidate, Node::Nil) || T::accepts(candidate))
                    && ctx.invoke(*hole, candidate)
            }
            Self::Node(pattern) => pattern.compare(candidate, ctx),
        }
    }
}

impl<T: Element> Syntax for Seq<T> {
    const KIND: NodeKind = T::LIST_KIND;

    fn from_hole(hole: Hole) -> Self {
        Self::Hole(hole)
    }

    fn hole(&self) -> Option<Hole> {
        match self {
            Self::Hole(hole) => Some(*hole),
            Self::Any | Self::Items(_) | Self::Rest(..) => None,
        }
    }

    fn accepts(node: Node<'_>) -> bool {
        T::list(node).is_some()
    }

    fn matches<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        if matches!(self, Self::Any) {
            return true;
        }
        let Some(items) = T::list(node) else {
            return false;
        };
        match self {
            Self::Any => true,
            Self::Hole(hole) => ctx.invoke(*hole, node),
            Self::Items(patterns) => {
                patterns.len() == items.len() && pairwise(patterns, items, ctx)
            }
            Self::Rest(prefix, hole) => {
                let Some((head, tail)) = items.split_at_checked(prefix.len()) else {
                    return false;
                };
                pairwise(prefix, head, ctx) && ctx.invoke(*hole, T::list_view(tail))
            }
        }
    }
}

fn pairwise<'a, T: Shape>(
    patterns: &[Slot<T>],
    items: &'a [Slot<T>],
    ctx: &mut MatchContext<'a>,
) -> bool {
    for (pattern, item) in patterns.iter().zip(items) {
        if !pattern.matches(T::view(item), ctx) {
            return false;
        }
    }
    true
}

impl Syntax for TokenSlot {
    const KIND: NodeKind = NodeKind::Token;

    fn from_hole(hole: Hole) -> Self {
        Self::Hole(hole)
    }

    fn hole(&self) -> Option<Hole> {
        match self {
            Self::Hole(hole) => Some(*hole),
            Self::Token(_) => None,
        }
    }

    fn accepts(node: Node<'_>) -> bool {
        matches!(node, Node::Token(_))
    }

    fn matches<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool {
        match self {
            Self::Token(token) => node.token() == Some(*token),
            Self::Hole(hole) => matches!(node, Node::Token(_)) && ctx.invoke(*hole, node),
        }
    }
}

macro_rules! element {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const LIST_KIND: NodeKind = NodeKind::$variant;

                fn list(node: Node<'_>) -> Option<&[Slot<Self>]> {
                    match node {
                        Node::$variant(items) => Some(items),
                        _ => None,
                    }
                }

                fn list_view(items: &[Slot<Self>]) -> Node<'_> {
                    Node::$variant(items)
                }
            }
        )*
    };
}

element!(
    Stmt => Stmts,
    Expr => Exprs,
    Spec => Specs,
    Ident => Idents,
    Field => Fields,
    Decl => Decls,
);
