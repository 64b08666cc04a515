//! Unit tests - Rendering rules checked through the public API only
//!
//! These tests build small ASTs and assert on the exact text they compile to.

mod escaping_tests;
mod naming_tests;
mod precedence_tests;
