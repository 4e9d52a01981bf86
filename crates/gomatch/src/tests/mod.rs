//! Unit tests for the matching engine.

mod matcher_tests;
mod semantic_tests;
mod support;
