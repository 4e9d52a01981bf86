//! Per-visit matching context.

use gomatch_ast::{Expr, Hole, Node, NodeId};
use gomatch_types::{ObjectId, Oracle, TypeAndValue, TypeId};
use tracing::trace;

use super::bindings::Bindings;
use super::{MATCHER_TARGET, Matcher};
use crate::config::MatcherConfig;
use crate::pattern::Syntax;

/// Ancestor path of the node being visited.
#[derive(Debug, Clone, Default)]
pub(crate) struct Path<'a> {
    nodes: Vec<Node<'a>>,
    fields: Vec<&'static str>,
}

impl<'a> Path<'a> {
    pub(crate) fn push(&mut self, field: &'static str, node: Node<'a>) {
        self.nodes.push(node);
        self.fields.push(field);
    }

    pub(crate) fn pop(&mut self) {
        self.nodes.pop();
        self.fields.pop();
    }
}

/// State available to predicates while one candidate is matched.
///
/// A context is created for every visited node and dropped once its
/// callback returns. It carries the path from the scan root down to the
/// candidate, the bindings made so far and the oracle for the tree.
pub struct MatchContext<'a> {
    matcher: &'a Matcher,
    oracle: &'a dyn Oracle,
    path: Path<'a>,
    bindings: Bindings<'a>,
}

impl<'a> MatchContext<'a> {
    pub(crate) fn new(matcher: &'a Matcher, oracle: &'a dyn Oracle, path: Path<'a>) -> Self {
        Self {
            matcher,
            oracle,
            path,
            bindings: Bindings::new(),
        }
    }

    pub(crate) fn into_parts(self) -> (Path<'a>, Bindings<'a>) {
        (self.path, self.bindings)
    }

    /// Returns the nodes from the scan root down to the candidate,
    /// inclusive.
    #[must_use]
    pub fn stack(&self) -> &[Node<'a>] {
        &self.path.nodes
    }

    /// Returns the field names parallel to [`Self::stack`].
    ///
    /// Entry `i` names the field of `stack()[i - 1]` that holds
    /// `stack()[i]`; the root's entry is empty.
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        &self.path.fields
    }

    /// Returns the parent of the candidate, if it is not the scan root.
    #[must_use]
    pub fn parent(&self) -> Option<Node<'a>> {
        let index = self.path.nodes.len().checked_sub(2)?;
        self.path.nodes.get(index).copied()
    }

    /// Returns the node bound to `name`.
    #[must_use]
    pub fn bound(&self, name: &str) -> Option<Node<'a>> {
        self.bindings.get(name)
    }

    /// Returns every binding made so far.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings<'a> {
        &self.bindings
    }

    /// Binds `name` to `node`, replacing an earlier binding.
    pub fn bind(&mut self, name: &str, node: Node<'a>) {
        if self.bindings.insert(name, node).is_some() {
            trace!(target: MATCHER_TARGET, name, "rebinding pattern variable");
        }
    }

    /// Matches `pattern` against `node` within this context, so bindings
    /// made by the sub-match are kept.
    pub fn matches<P: Syntax>(&mut self, pattern: &P, node: impl Into<Node<'a>>) -> bool {
        pattern.matches(node.into(), self)
    }

    /// Reports whether any node of the subtree rooted at `root` matches
    /// `pattern`.
    ///
    /// The nested scan uses fresh contexts; its bindings are not visible
    /// here.
    #[must_use]
    pub fn any_match<P: Syntax>(&self, pattern: &P, root: impl Into<Node<'a>>) -> bool {
        self.matcher.any_match(self.oracle, pattern, root)
    }

    /// Returns the matcher that owns the patterns being evaluated.
    #[must_use]
    pub const fn matcher(&self) -> &'a Matcher {
        self.matcher
    }

    /// Returns the matcher's configuration.
    #[must_use]
    pub const fn config(&self) -> MatcherConfig {
        self.matcher.config()
    }

    /// Returns the semantic oracle for the scanned tree.
    #[must_use]
    pub const fn oracle(&self) -> &'a dyn Oracle {
        self.oracle
    }

    /// Returns the object an identifier or selector refers to.
    ///
    /// Parentheses are ignored; selectors resolve through their selected
    /// name.
    #[must_use]
    pub fn object_of(&self, node: Node<'_>) -> Option<ObjectId> {
        let target = match node {
            Node::Expr(expr) => Node::Expr(expr.unparen()),
            _ => node,
        };
        match target {
            Node::Expr(Expr::Selector(selector)) => selector
                .sel
                .as_node()
                .and_then(|sel| self.oracle.object_of(sel)),
            _ => target.ident().and_then(|ident| self.oracle.object_of(ident)),
        }
    }

    /// Returns the type of an expression-like node.
    #[must_use]
    pub fn type_of(&self, node: Node<'_>) -> Option<TypeId> {
        self.oracle.type_of(node)
    }

    /// Returns the object a call invokes.
    #[must_use]
    pub fn callee(&self, node: Node<'_>) -> Option<ObjectId> {
        node.call().and_then(|call| self.oracle.callee(call))
    }

    /// Returns the function or concrete method a call statically invokes.
    #[must_use]
    pub fn static_callee(&self, node: Node<'_>) -> Option<ObjectId> {
        node.call().and_then(|call| self.oracle.static_callee(call))
    }

    /// Records the type of the node with this id.
    pub fn update_type(&self, id: NodeId, tv: TypeAndValue) {
        self.oracle.update_type(id, tv);
    }

    /// Records that the identifier with this id refers to `obj`.
    pub fn update_uses(&self, id: NodeId, obj: ObjectId) {
        self.oracle.update_uses(id, obj);
    }

    /// Records that the identifier with this id declares `obj`.
    pub fn update_defs(&self, id: NodeId, obj: ObjectId) {
        self.oracle.update_defs(id, obj);
    }

    /// Copies every fact recorded for `from` onto `to`.
    pub fn copy_type_info(&self, from: NodeId, to: NodeId) {
        self.oracle.copy_type_info(from, to);
    }

    /// Runs the predicate `hole` refers to.
    ///
    /// Holes made by another matcher never match.
    pub(crate) fn invoke(&mut self, hole: Hole, node: Node<'a>) -> bool {
        let matcher = self.matcher;
        debug_assert_eq!(
            hole.owner(),
            matcher.id(),
            "hole {hole} resolved by a foreign matcher"
        );
        let Some(predicate) = matcher.predicate(hole) else {
            return false;
        };
        predicate(node, self)
    }
}

impl std::fmt::Debug for MatchContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchContext")
            .field("matcher", &self.matcher.id())
            .field("depth", &self.path.nodes.len())
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}
