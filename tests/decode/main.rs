//! Integration tests for Layer 1: Decoders
//!
//! Tests the micro-language decoders against the built-in lexicons and
//! catalogs, in both locales.

mod properties;
mod qline;
mod remarks;
mod weather;
