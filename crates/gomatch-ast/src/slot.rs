//! Pattern-capable child positions.
//!
//! Every child of a tree node is stored in one of three position types so
//! the same static type serves both real trees and patterns:
//!
//! - [`Slot`] holds a single node, nothing, or a predicate [`Hole`].
//! - [`Seq`] holds an ordered list, with extra forms for "any list", a
//!   variadic tail and a predicate over the whole list.
//! - [`TokenSlot`] holds a token or a hole. Tokens have no wildcard form.

use crate::id::Hole;
use crate::token::Token;

/// A single child position.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    /// No node. In a pattern this accepts any candidate.
    Nil,
    /// A concrete node.
    Node(Box<T>),
    /// A predicate reference.
    Hole(Hole),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::node(value)
    }
}

impl<T> Slot<T> {
    /// Wraps a concrete node.
    #[must_use]
    pub fn node(value: T) -> Self {
        Self::Node(Box::new(value))
    }

    /// Returns `true` when the slot holds nothing.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the concrete node, if any.
    #[must_use]
    pub fn as_node(&self) -> Option<&T> {
        match self {
            Self::Node(node) => Some(node),
            Self::Nil | Self::Hole(_) => None,
        }
    }

    /// Returns the predicate reference, if any.
    #[must_use]
    pub const fn hole(&self) -> Option<Hole> {
        match self {
            Self::Hole(hole) => Some(*hole),
            Self::Nil | Self::Node(_) => None,
        }
    }

    /// Converts the concrete node while preserving `Nil` and holes.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Self::Nil => Slot::Nil,
            Self::Node(node) => Slot::node(f(*node)),
            Self::Hole(hole) => Slot::Hole(hole),
        }
    }
}

/// An ordered list position.
#[derive(Debug, Clone, PartialEq)]
pub enum Seq<T> {
    /// The nil list. In a pattern this accepts any list.
    Any,
    /// An exact list of elements.
    Items(Vec<Slot<T>>),
    /// Leading elements followed by a predicate over the remaining suffix.
    Rest(Vec<Slot<T>>, Hole),
    /// A predicate over the whole list.
    Hole(Hole),
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items.into_iter().map(Slot::node).collect())
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Items(iter.into_iter().map(Slot::node).collect())
    }
}

impl<T> Seq<T> {
    /// An exact empty list, distinct from the [`Seq::Any`] wildcard.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Items(Vec::new())
    }

    /// Builds an exact list from pattern-capable elements.
    #[must_use]
    pub const fn of(items: Vec<Slot<T>>) -> Self {
        Self::Items(items)
    }

    /// Returns the listed elements.
    ///
    /// For a rest list this is the leading prefix; holes and the nil list
    /// have no elements.
    #[must_use]
    pub fn items(&self) -> &[Slot<T>] {
        match self {
            Self::Items(items) | Self::Rest(items, _) => items,
            Self::Any | Self::Hole(_) => &[],
        }
    }

    /// Returns the whole-list predicate reference, if any.
    #[must_use]
    pub const fn hole(&self) -> Option<Hole> {
        match self {
            Self::Hole(hole) => Some(*hole),
            Self::Any | Self::Items(_) | Self::Rest(..) => None,
        }
    }

    /// Iterates over the concrete elements, skipping nil and hole slots.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.items().iter().filter_map(Slot::as_node)
    }
}

/// A token-valued position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSlot {
    /// A concrete token, compared literally.
    Token(Token),
    /// A predicate reference.
    Hole(Hole),
}

impl Default for TokenSlot {
    fn default() -> Self {
        Self::Token(Token::Illegal)
    }
}

impl From<Token> for TokenSlot {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl TokenSlot {
    /// Returns the concrete token, if any.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Hole(_) => None,
        }
    }

    /// Returns the predicate reference, if any.
    #[must_use]
    pub const fn hole(self) -> Option<Hole> {
        match self {
            Self::Hole(hole) => Some(hole),
            Self::Token(_) => None,
        }
    }
}
