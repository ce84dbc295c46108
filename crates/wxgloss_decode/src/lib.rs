//! Decoders for the compact micro-languages inside aviation messages.
//!
//! This crate provides:
//! - [`weather`] - Weather phenomena codes (`-TSRA`)
//! - [`remark`] - METAR remark groups (`SLP134`, `T00121018`, `P0125`)
//! - [`qline`] - The eight-part NOTAM Q-line
//! - [`notam_body`] - NOTAM `E)` text vocabulary substitution
//! - [`taf`] - TAF temperature extremes
//! - [`format`] - Canonical display formatting for structured values
//!
//! Every function here is total: malformed input degrades to its raw text or
//! `None`, never to an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cloud;
pub mod format;
pub mod notam_body;
pub mod qline;
pub mod remark;
pub mod taf;
pub mod weather;

pub use cloud::{explain_cloud_layer, explain_clouds};
pub use notam_body::map_notam_body;
pub use remark::{RemarkGroup, explain_remark};
pub use taf::{ExtremeKind, TemperatureExtreme};
pub use weather::{WeatherCode, explain_weather, explain_weather_list};
