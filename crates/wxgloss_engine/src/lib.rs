//! Token classification and field explanation for wxgloss.
//!
//! This crate provides:
//! - [`classify`] - One [`FieldKey`] per raw token, from an ordered rule table
//! - [`explain`] - Ordered, localized [`ExplainedField`]s per message type
//! - [`analyze`] - Both passes, plus the join between tokens and fields
//! - [`ExplainContext`] - The injected localizer, lexicons and station names
//!
//! Both passes are pure functions of the message and the context: they never
//! fail, never mutate their inputs, and return identical output for identical
//! input.
//!
//! [`FieldKey`]: wxgloss_foundation::FieldKey
//! [`ExplainedField`]: wxgloss_foundation::ExplainedField

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod classify;
pub mod context;
pub mod explain;
mod view;

pub use analysis::{Analysis, analyze, field_for};
pub use classify::{TrendState, classify, classify_as};
pub use context::ExplainContext;
pub use explain::{explain, explain_as};
