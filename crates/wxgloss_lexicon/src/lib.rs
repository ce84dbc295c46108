//! Lexicon tables and localization catalogs for wxgloss.
//!
//! This crate provides:
//! - [`LexiconSet`] - Read-only code-to-text tables consulted by the decoders
//! - [`Localizer`] - Key-to-template lookup with `{param}` interpolation
//! - [`Catalog`] - Built-in English and Simplified Chinese templates
//! - [`tr!`] - Shorthand for rendering a key with named parameters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builtin;
pub mod catalog;
pub mod lexicon;

pub use catalog::{Catalog, Localizer, interpolate};
pub use lexicon::{Lexicon, LexiconSet, LexiconTable};
