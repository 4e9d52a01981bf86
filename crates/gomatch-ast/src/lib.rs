//! Syntax trees for structural pattern matching.
//!
//! This crate defines the tree model consumed by the `gomatch` engine: Go
//! declarations, statements and expressions as closed sum types, with every
//! child position typed so that the *same* value can be a real tree or a
//! pattern fragment.
//!
//! - [`Slot`] positions hold a node, nothing ([`Slot::Nil`], which matches
//!   anything in a pattern) or a predicate [`Hole`].
//! - [`Seq`] positions hold lists, with extra forms for "any list", a
//!   variadic tail ([`Seq::Rest`]) and a predicate over the whole list.
//! - [`TokenSlot`] positions hold a token or a hole. Tokens are always
//!   compared literally.
//!
//! [`Node`] is a borrowed, copyable view over any node, list or token. It
//! enumerates children in grammar order and renders source text through
//! [`show_node`].
//!
//! # Example
//!
//! ```
//! use gomatch_ast::{build, Node, NodeKind};
//!
//! let call = build::call(build::ident("append"), vec![build::ident_expr("xs")]);
//! let node = Node::CallExpr(&call);
//! assert_eq!(node.kind(), NodeKind::CallExpr);
//! assert_eq!(node.to_string(), "append(xs)");
//! ```

pub mod build;
mod children;
mod id;
mod literal;
mod node;
mod printer;
mod slot;
mod token;
mod view;

pub use children::Child;
pub use id::{Hole, NodeId};
pub use literal::{LitKind, LitValue};
pub use node::*;
pub use printer::show_node;
pub use slot::{Seq, Slot, TokenSlot};
pub use token::{ChanDir, Token};
pub use view::{Node, NodeKind};

#[cfg(test)]
mod tests;
