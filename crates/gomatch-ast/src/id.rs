//! Node identities and predicate holes.

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_NODE_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of an expression-like node.
///
/// Real trees receive fresh identifiers from [`NodeId::fresh`] so semantic
/// metadata can be keyed by node. Pattern literals keep the default
/// identifier, which never collides with a fresh one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Identifier carried by pattern literals and detached nodes.
    pub const DUMMY: Self = Self(0);

    /// Allocates a process-unique identifier.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns `true` for the identifier used by pattern literals.
    #[must_use]
    pub const fn is_dummy(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A reference to a predicate stored in a matcher's arena.
///
/// A hole stands in for a node (or list, or token) inside a pattern
/// fragment. The `owner` tag names the arena that allocated it so a hole
/// can only be resolved by the matcher that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hole {
    owner: u32,
    index: u32,
}

impl Hole {
    /// Creates a hole referring to `index` in the arena tagged `owner`.
    #[must_use]
    pub const fn new(owner: u32, index: u32) -> Self {
        Self { owner, index }
    }

    /// Returns the tag of the owning arena.
    #[must_use]
    pub const fn owner(self) -> u32 {
        self.owner
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.index)
    }
}
