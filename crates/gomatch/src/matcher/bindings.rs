//! Pattern variable bindings.

use std::collections::HashMap;

use gomatch_ast::Node;

/// Nodes captured by pattern variables during one match.
///
/// Binding a name twice keeps the last node written.
#[derive(Debug, Clone, Default)]
pub struct Bindings<'a> {
    entries: HashMap<String, Node<'a>>,
}

impl<'a> Bindings<'a> {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `node`, returning the node it replaced.
    pub fn insert(&mut self, name: impl Into<String>, node: Node<'a>) -> Option<Node<'a>> {
        self.entries.insert(name.into(), node)
    }

    /// Returns the node bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Node<'a>> {
        self.entries.get(name).copied()
    }

    /// Returns `true` when `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Node<'a>)> + '_ {
        self.entries.iter().map(|(name, node)| (name.as_str(), *node))
    }

    /// Returns the bound names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
