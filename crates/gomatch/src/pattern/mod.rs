//! Pattern encoding.
//!
//! A pattern is a value of the very type it matches. Every child position
//! of the tree model can hold a concrete fragment, nothing (the wildcard),
//! or a [`Hole`] referring to a predicate in a [`crate::Matcher`]'s arena.
//! The same literal syntax therefore describes both trees and partial
//! shapes:
//!
//! ```ignore
//! let call = CallExpr {
//!     fun: m.pattern(|node, ctx| /* ... */ true),
//!     args: Seq::of(vec![m.var("x")]),
//!     ..CallExpr::default()
//! };
//! ```
//!
//! The [`Syntax`] trait is implemented by the three position types
//! ([`Slot`], [`Seq`] and [`TokenSlot`]) and is the bound every combinator
//! is generic over. Because a combinator's operands and result share one
//! `P: Syntax`, composing patterns of different kinds does not compile.

mod syntax;

use gomatch_ast::{
    BasicLit, BlockStmt, CallExpr, Decl, Expr, Field, FieldList, File, FuncType, Hole, Ident,
    Node, NodeKind, Seq, Slot, Spec, Stmt, TokenSlot,
};

use crate::config::MatcherConfig;
use crate::matcher::MatchContext;

/// A pattern-capable position type.
pub trait Syntax: Clone + 'static {
    /// The category of node this position matches.
    const KIND: NodeKind;

    /// Wraps a predicate reference.
    fn from_hole(hole: Hole) -> Self;

    /// Returns the predicate reference, if this is one.
    fn hole(&self) -> Option<Hole>;

    /// Returns `true` when `node` belongs to the category a predicate of
    /// this kind is shown.
    fn accepts(node: Node<'_>) -> bool;

    /// Decides whether `node` satisfies this pattern.
    fn matches<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool;
}

/// A node type that can sit in a [`Slot`].
///
/// Implementations hold the per-category structural comparison.
pub trait Shape: Clone + 'static {
    /// The category of this node type.
    const KIND: NodeKind;

    /// Returns `true` for views a predicate over this type may inspect.
    ///
    /// Expression positions accept identifiers, literals, calls and
    /// signatures in their typed positions too, since those are
    /// expressions.
    fn accepts(node: Node<'_>) -> bool;

    /// Views a child slot of a real tree.
    fn view(slot: &Slot<Self>) -> Node<'_>;

    /// Compares this concrete fragment against a candidate.
    fn compare<'a>(&self, node: Node<'a>, ctx: &mut MatchContext<'a>) -> bool;

    /// Rewrites a pattern slot before comparison.
    fn normalize(slot: &Slot<Self>, _config: MatcherConfig) -> &Slot<Self> {
        slot
    }

    /// Rewrites a candidate before comparison.
    fn normalize_node(node: Node<'_>, _config: MatcherConfig) -> Node<'_> {
        node
    }
}

/// A node type that appears in ordered lists.
pub trait Element: Shape {
    /// The category of a list of this type.
    const LIST_KIND: NodeKind;

    /// Returns the elements when `node` is a list of this type.
    fn list(node: Node<'_>) -> Option<&[Slot<Self>]>;

    /// Views a list or list suffix.
    fn list_view(items: &[Slot<Self>]) -> Node<'_>;
}

/// Expression pattern.
pub type ExprPattern = Slot<Expr>;
/// Statement pattern.
pub type StmtPattern = Slot<Stmt>;
/// Declaration pattern.
pub type DeclPattern = Slot<Decl>;
/// Specification pattern.
pub type SpecPattern = Slot<Spec>;
/// Identifier pattern, for typed identifier positions.
pub type IdentPattern = Slot<Ident>;
/// Literal pattern, for struct tags and import paths.
pub type BasicLitPattern = Slot<BasicLit>;
/// Call pattern, for `go` and `defer` statements.
pub type CallExprPattern = Slot<CallExpr>;
/// Signature pattern.
pub type FuncTypePattern = Slot<FuncType>;
/// Block pattern.
pub type BlockStmtPattern = Slot<BlockStmt>;
/// Field pattern.
pub type FieldPattern = Slot<Field>;
/// Field list pattern.
pub type FieldListPattern = Slot<FieldList>;
/// File pattern.
pub type FilePattern = Slot<File>;
/// Token pattern.
pub type TokenPattern = TokenSlot;
/// Expression list pattern.
pub type ExprsPattern = Seq<Expr>;
/// Statement list pattern.
pub type StmtsPattern = Seq<Stmt>;
/// Specification list pattern.
pub type SpecsPattern = Seq<Spec>;
/// Identifier list pattern.
pub type IdentsPattern = Seq<Ident>;
/// Field entries pattern.
pub type FieldsPattern = Seq<Field>;
/// Declaration list pattern.
pub type DeclsPattern = Seq<Decl>;
