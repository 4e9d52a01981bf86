//! The matcher: predicate arena, structural comparison and traversal.
//!
//! A [`Matcher`] owns every predicate its patterns refer to. Patterns are
//! plain data holding [`Hole`]s (arena indices tagged with the matcher's
//! id), so they can be cloned and stored freely, but only the matcher that
//! built them can evaluate them.

mod bindings;
mod compare;
mod context;
mod traversal;

use std::sync::atomic::{AtomicU32, Ordering};

use gomatch_ast::{Hole, Node, NodeKind, Seq, Slot};
use tracing::trace;

use crate::config::MatcherConfig;
use crate::pattern::{Element, Syntax};

pub use bindings::Bindings;
pub use context::MatchContext;
pub(crate) use context::Path;

/// Tracing target for pattern construction and matching.
pub(crate) const MATCHER_TARGET: &str = "gomatch::matcher";

static NEXT_MATCHER_ID: AtomicU32 = AtomicU32::new(1);

/// A predicate over a candidate node.
///
/// Predicates receive the candidate and the active context, and may bind
/// variables or run sub-matches through it.
pub type Predicate = Box<dyn for<'a> Fn(Node<'a>, &mut MatchContext<'a>) -> bool>;

/// Result of a successful match, detached from the scan that produced it.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    node: Node<'a>,
    stack: Vec<Node<'a>>,
    names: Vec<&'static str>,
    bindings: Bindings<'a>,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn new(node: Node<'a>, ctx: &MatchContext<'a>) -> Self {
        Self {
            node,
            stack: ctx.stack().to_vec(),
            names: ctx.names().to_vec(),
            bindings: ctx.bindings().clone(),
        }
    }

    /// Returns the matched node.
    #[must_use]
    pub const fn node(&self) -> Node<'a> {
        self.node
    }

    /// Returns the path from the scan root to the matched node.
    #[must_use]
    pub fn stack(&self) -> &[Node<'a>] {
        &self.stack
    }

    /// Returns the field names parallel to [`Self::stack`].
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Gets the node bound to a pattern variable.
    #[must_use]
    pub fn capture(&self, name: &str) -> Option<Node<'a>> {
        self.bindings.get(name)
    }

    /// Returns all bindings.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings<'a> {
        &self.bindings
    }
}

/// Owner of a predicate arena and entry point for matching.
///
/// Build patterns first, then scan: construction needs `&mut self`, while
/// matching borrows the matcher shared for the duration of a scan.
pub struct Matcher {
    id: u32,
    config: MatcherConfig,
    predicates: Vec<Predicate>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    /// Creates a matcher with an explicit configuration.
    #[must_use]
    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            id: NEXT_MATCHER_ID.fetch_add(1, Ordering::Relaxed),
            config,
            predicates: Vec::new(),
        }
    }

    /// Returns the tag carried by this matcher's holes.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> MatcherConfig {
        self.config
    }

    /// Returns the number of registered predicates.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Registers a predicate and returns a pattern of kind `P` that
    /// refers to it.
    pub fn pattern<P: Syntax>(
        &mut self,
        predicate: impl for<'a> Fn(Node<'a>, &mut MatchContext<'a>) -> bool + 'static,
    ) -> P {
        P::from_hole(self.register(P::KIND, Box::new(predicate)))
    }

    /// Returns the predicate a pattern refers to, if it is a predicate
    /// reference made by this matcher.
    #[must_use]
    pub fn predicate_of<P: Syntax>(&self, pattern: &P) -> Option<&Predicate> {
        pattern.hole().and_then(|hole| self.predicate(hole))
    }

    /// Creates a pattern variable: it matches anything and binds the
    /// candidate to `name`.
    pub fn var<P: Syntax>(&mut self, name: impl Into<String>) -> P {
        let key = name.into();
        self.pattern(move |node, ctx| {
            ctx.bind(&key, node);
            true
        })
    }

    /// Creates a rest list: `prefix` matches the leading elements one to
    /// one and `tail` receives the remaining suffix as a single list.
    pub fn rest<T: Element>(
        &mut self,
        prefix: Vec<Slot<T>>,
        tail: impl for<'a> Fn(Node<'a>, &mut MatchContext<'a>) -> bool + 'static,
    ) -> Seq<T> {
        Seq::Rest(prefix, self.register(T::LIST_KIND, Box::new(tail)))
    }

    /// Creates a rest list whose suffix is bound to `name`.
    pub fn rest_var<T: Element>(&mut self, prefix: Vec<Slot<T>>, name: impl Into<String>) -> Seq<T> {
        let key = name.into();
        self.rest(prefix, move |node, ctx| {
            ctx.bind(&key, node);
            true
        })
    }

    fn register(&mut self, kind: NodeKind, predicate: Predicate) -> Hole {
        let index = u32::try_from(self.predicates.len()).unwrap_or(u32::MAX);
        self.predicates.push(predicate);
        trace!(
            target: MATCHER_TARGET,
            matcher = self.id,
            index,
            kind = %kind,
            "registered predicate"
        );
        Hole::new(self.id, index)
    }

    pub(crate) fn predicate(&self, hole: Hole) -> Option<&Predicate> {
        if hole.owner() != self.id {
            return None;
        }
        usize::try_from(hole.index())
            .ok()
            .and_then(|index| self.predicates.get(index))
    }
}
