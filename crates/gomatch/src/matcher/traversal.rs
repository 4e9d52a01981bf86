//! Post-order scans over a tree.
//!
//! Every node below the root (the root included) is visited once, children
//! before parents and siblings in grammar order. At each node a fresh
//! [`MatchContext`] carries the ancestor path, which is maintained
//! incrementally during the walk rather than rebuilt per visit.

use std::ops::ControlFlow;

use gomatch_ast::Node;
use gomatch_types::Oracle;
use tracing::debug;

use super::context::{MatchContext, Path};
use super::{MATCHER_TARGET, MatchResult, Matcher};
use crate::pattern::Syntax;

struct Walk<'a, 'p, P, F> {
    matcher: &'a Matcher,
    oracle: &'a dyn Oracle,
    pattern: &'p P,
    callback: F,
    path: Path<'a>,
    visited: usize,
    matched: usize,
}

impl<'a, P, F> Walk<'a, '_, P, F>
where
    P: Syntax,
    F: FnMut(Node<'a>, &mut MatchContext<'a>) -> ControlFlow<()>,
{
    fn visit(&mut self, field: &'static str, node: Node<'a>) -> ControlFlow<()> {
        self.path.push(field, node);
        let mut flow = ControlFlow::Continue(());
        for child in node.children() {
            flow = self.visit(child.field, child.node);
            if flow.is_break() {
                break;
            }
        }
        if flow.is_continue() {
            flow = self.evaluate(node);
        }
        self.path.pop();
        flow
    }

    fn evaluate(&mut self, node: Node<'a>) -> ControlFlow<()> {
        self.visited += 1;
        let taken = std::mem::take(&mut self.path);
        let mut ctx = MatchContext::new(self.matcher, self.oracle, taken);
        let flow = if self.pattern.matches(node, &mut ctx) {
            self.matched += 1;
            (self.callback)(node, &mut ctx)
        } else {
            ControlFlow::Continue(())
        };
        let (restored, _) = ctx.into_parts();
        self.path = restored;
        flow
    }
}

impl Matcher {
    /// Matches `pattern` against `node` alone, without descending.
    #[must_use]
    pub fn matches<'a, P: Syntax>(
        &'a self,
        oracle: &'a dyn Oracle,
        pattern: &P,
        node: impl Into<Node<'a>>,
    ) -> bool {
        let target = node.into();
        let mut path = Path::default();
        path.push("", target);
        let mut ctx = MatchContext::new(self, oracle, path);
        pattern.matches(target, &mut ctx)
    }

    /// Calls `callback` for every node of the tree rooted at `root` that
    /// matches `pattern`, in post-order.
    pub fn scan<'a, P: Syntax>(
        &'a self,
        oracle: &'a dyn Oracle,
        pattern: &P,
        root: impl Into<Node<'a>>,
        mut callback: impl FnMut(Node<'a>, &mut MatchContext<'a>),
    ) {
        let flow = self.scan_until(oracle, pattern, root, |node, ctx| {
            callback(node, ctx);
            ControlFlow::Continue(())
        });
        debug_assert!(flow.is_continue());
    }

    /// Like [`Self::scan`], but stops as soon as `callback` breaks.
    ///
    /// Returns the break when the scan was cut short.
    pub fn scan_until<'a, P: Syntax>(
        &'a self,
        oracle: &'a dyn Oracle,
        pattern: &P,
        root: impl Into<Node<'a>>,
        callback: impl FnMut(Node<'a>, &mut MatchContext<'a>) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let mut walk = Walk {
            matcher: self,
            oracle,
            pattern,
            callback,
            path: Path::default(),
            visited: 0,
            matched: 0,
        };
        let flow = walk.visit("", root.into());
        debug!(
            target: MATCHER_TARGET,
            kind = %P::KIND,
            visited = walk.visited,
            matched = walk.matched,
            stopped = flow.is_break(),
            "scan finished"
        );
        flow
    }

    /// Reports whether any node of the tree rooted at `root` matches
    /// `pattern`, stopping at the first match.
    #[must_use]
    pub fn any_match<'a, P: Syntax>(
        &'a self,
        oracle: &'a dyn Oracle,
        pattern: &P,
        root: impl Into<Node<'a>>,
    ) -> bool {
        self.scan_until(oracle, pattern, root, |_, _| ControlFlow::Break(()))
            .is_break()
    }

    /// Collects every match in post-order.
    #[must_use]
    pub fn find_all<'a, P: Syntax>(
        &'a self,
        oracle: &'a dyn Oracle,
        pattern: &P,
        root: impl Into<Node<'a>>,
    ) -> Vec<MatchResult<'a>> {
        let mut results = Vec::new();
        self.scan(oracle, pattern, root, |node, ctx| {
            results.push(MatchResult::new(node, ctx));
        });
        results
    }

    /// Returns the first match in post-order.
    #[must_use]
    pub fn find_first<'a, P: Syntax>(
        &'a self,
        oracle: &'a dyn Oracle,
        pattern: &P,
        root: impl Into<Node<'a>>,
    ) -> Option<MatchResult<'a>> {
        let mut found = None;
        let flow = self.scan_until(oracle, pattern, root, |node, ctx| {
            found = Some(MatchResult::new(node, ctx));
            ControlFlow::Break(())
        });
        debug_assert_eq!(flow.is_break(), found.is_some());
        found
    }
}
