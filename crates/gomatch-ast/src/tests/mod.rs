//! Unit tests for the gomatch-ast crate.

mod printer_tests;
