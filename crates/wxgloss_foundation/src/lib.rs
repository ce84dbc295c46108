//! Message schema, field identities, output records and errors for wxgloss.
//!
//! This crate provides:
//! - [`StructuredMessage`] - The decoded-message contract the engine consumes
//! - [`FieldKey`] - Field identities shared by the classifier and explainer
//! - [`ExplainedField`] / [`ClassifiedToken`] - Engine output records
//! - [`Locale`] - Supported display locales
//! - [`Error`] - Error types for the loading edges

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod field;
pub mod locale;
pub mod message;
pub mod output;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use field::{FieldKey, NotamItem};
pub use locale::Locale;
pub use message::{
    CloudLayer, Issue, MessageType, Normalized, Parsed, Pressure, Rvr, RvrTendency, StationInfo,
    StructuredMessage, TemperaturePair, Trend, TrendNormalized, UtcTime, ValidityPeriod,
    Visibility, Wind, WindVariation,
};
pub use output::{ClassifiedToken, ExplainedField, FieldMeta, LayerDetail, QLinePart, QPartKind};
