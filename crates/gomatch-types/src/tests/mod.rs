//! Unit tests for the semantic model.

mod callee_tests;
mod lookup_tests;
mod relation_tests;
