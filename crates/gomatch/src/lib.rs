//! Structural pattern matching over Go syntax trees.
//!
//! Patterns are written as ordinary tree fragments from [`gomatch_ast`],
//! with predicate holes wherever a fragment is too specific. A
//! [`Matcher`] owns the predicates, compares fragments structurally and
//! drives post-order scans over real trees, consulting a
//! [`gomatch_types::Oracle`] for names and types.
//!
//! ```ignore
//! use gomatch::{Matcher, ExprPattern, combinator, semantic};
//! use gomatch_ast::{CallExpr, Expr, Seq, Slot};
//!
//! let mut m = Matcher::new();
//! let append = semantic::builtin_callee::<ExprPattern>(&mut m, universe, "append")?;
//! let one_arg = Slot::node(Expr::Call(CallExpr {
//!     args: Seq::of(vec![m.var("x")]),
//!     ..CallExpr::default()
//! }));
//! let pattern = combinator::and(&mut m, append, one_arg);
//! m.scan(&package, &pattern, &file, |node, ctx| {
//!     let x = ctx.bound("x");
//!     // ...
//! });
//! ```
//!
//! The crate is organised bottom-up:
//!
//! - [`pattern`]: the position types patterns are made of and the
//!   [`Syntax`] trait combinators are generic over;
//! - [`combinator`]: wildcards, absence, bindings, boolean composition,
//!   containment and syntactic predicates;
//! - [`semantic`]: callee and type relation predicates;
//! - [`Matcher`]: the predicate arena, structural comparison and scans.

pub mod combinator;
mod config;
mod error;
mod matcher;
pub mod pattern;
pub mod semantic;

pub use config::MatcherConfig;
pub use error::PatternError;
pub use matcher::{Bindings, MatchContext, MatchResult, Matcher, Predicate};
pub use pattern::{
    BasicLitPattern, BlockStmtPattern, CallExprPattern, DeclPattern, DeclsPattern, Element,
    ExprPattern, ExprsPattern, FieldListPattern, FieldPattern, FieldsPattern, FilePattern,
    FuncTypePattern, IdentPattern, IdentsPattern, Shape, SpecPattern, SpecsPattern,
    StmtPattern, StmtsPattern, Syntax, TokenPattern,
};

#[cfg(test)]
mod tests;
