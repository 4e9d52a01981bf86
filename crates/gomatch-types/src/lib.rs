//! Semantic model for structural pattern matching.
//!
//! Predicates that look past syntax consult an [`Oracle`]: a read-only view
//! of the objects and types a type checker attached to a tree, keyed by
//! [`gomatch_ast::NodeId`]. This crate supplies:
//!
//! - [`Universe`], an arena of objects, types and packages pre-populated
//!   with the predeclared identifiers (`int`, `error`, `append`, ...);
//! - the type relations predicates need: [`Universe::identical`],
//!   [`Universe::assignable`], [`Universe::convertible`],
//!   [`Universe::implements`] and [`Universe::lookup_field_or_method`];
//! - [`Info`] tables and the [`Package`] oracle that serves them;
//! - call target resolution through [`Oracle::callee`].

mod callee;
mod info;
mod lookup;
mod object;
mod oracle;
mod relation;
mod ty;
mod universe;

pub use callee::{callee, static_callee};
pub use info::{Info, Mode, Selection, SelectionKind, TypeAndValue};
pub use lookup::Lookup;
pub use object::{Object, ObjectId, ObjectKind};
pub use oracle::{Oracle, Package};
pub use ty::{BasicKind, Interface, Named, Signature, Struct, Type, TypeId};
pub use universe::{BUILTINS, PackageData, PackageId, Universe};

#[cfg(test)]
mod tests;
