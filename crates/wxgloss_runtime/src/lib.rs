//! Command-line interface and REPL for wxgloss.
//!
//! This crate provides:
//! - [`RuntimeConfig`] - Locale, output format, override files and logging
//! - [`Session`] - Loaded lexicons and catalog, message documents to [`Report`]s
//! - [`Renderer`] - Human-readable and JSON output
//! - [`Repl`] - Interactive reading of message documents
//! - [`logging`] - The `tracing` subscriber used by the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;
pub mod session;

pub use config::{LOCALE_ENV, OutputFormat, RuntimeConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::{HumanRenderer, JsonRenderer, Renderer, renderer_for};
pub use repl::{Outcome, Repl, is_complete};
pub use session::{Report, Session, load_messages};
