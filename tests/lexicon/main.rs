//! Integration tests for Layer 1: Lexicons and catalogs
//!
//! Tests the built-in data and the JSON override documents.

mod catalogs;
mod lexicons;
mod overrides;
