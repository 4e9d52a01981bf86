//! Predicates over the semantic oracle.
//!
//! These combinators answer questions syntax cannot: what a name refers
//! to, which function a call invokes, and how an expression's type
//! relates to another type. Every query is read-only, and a node the
//! oracle knows nothing about simply does not match.
//!
//! Combinators that resolve a symbol while the pattern is built take the
//! [`Universe`](gomatch_types::Universe) the symbol lives in and fail with
//! a [`PatternError`](crate::PatternError) when the symbol is missing or
//! of the wrong category.

mod callee;
mod typing;

pub use callee::{
    builtin_callee, builtin_callee_of, callee_of, func_callee, func_callee_of,
    func_or_method_callee_of, iface_callee, iface_callee_of, method_callee, method_callee_of,
    static_callee_of, var_callee_of,
};
pub use typing::{
    Typed, type_assignable_to, type_convertible_to, type_identical, type_identical_ignore_tags,
    type_implements, type_of, type_ptr_implements,
};

/// Tracing target for semantic pattern construction.
pub(crate) const SEMANTIC_TARGET: &str = "gomatch::semantic";
