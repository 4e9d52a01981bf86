//! Pattern combinators.
//!
//! Every combinator registers one predicate with the [`Matcher`] it is
//! given and returns a pattern that refers to it. Operands are ordinary
//! patterns: concrete fragments are matched structurally, `Nil` slots match
//! anything, and holes run their predicates.
//!
//! Most combinators are generic over the position type they produce, so
//! the same predicate can fill an expression slot or a typed identifier
//! slot:
//!
//! ```ignore
//! let mut m = Matcher::new();
//! let fun: ExprPattern = ident_name_of(&mut m, "append");
//! let name: IdentPattern = ident_name_of(&mut m, "append");
//! ```
//!
//! [`Matcher`]: crate::Matcher

mod decl;
mod ident;
mod list;
mod literal;
mod primitive;
mod selector;
mod tag;

pub use decl::{func_decl_of, init_func, ptr_of};
pub use ident::{
    ident_is_func, ident_is_method, ident_name_matches, ident_name_of, ident_object_of, ident_of,
    ident_sig_of, ident_type_of, is_builtin,
};
pub use list::{len_eq, len_ge, len_gt, len_le, len_lt, len_of, list_contains};
pub use literal::{lit_int_of, lit_kind_of, lit_of, lit_string_of, lit_string_value_of, tag_of};
pub use primitive::{
    absent, and, and_all, any, bind, contains, not, or, or_any, pattern_of, wildcard,
};
pub use selector::{object_of, selector_field_of, selector_object_of, selector_of, selector_pkg_of};
pub use tag::StructTag;

/// Tracing target for combinator construction.
pub(crate) const COMBINATOR_TARGET: &str = "gomatch::combinator";
