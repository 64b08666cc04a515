//! Integration tests - Complete statements built from several clause kinds
//!
//! These tests verify that clauses, patterns and expressions compose into
//! whole statements with consistent naming and parameters.

mod render_property_tests;
mod statement_tests;
mod union_tests;
