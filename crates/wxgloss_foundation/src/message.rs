//! The structured message contract consumed by the engine.
//!
//! These shapes are produced by an external decoder and are treated as a
//! fixed schema. Every field defaults when absent or `null`, and unknown
//! fields are ignored, so partially decoded messages still load.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::locale::Locale;

/// Deserializes `null` the same way as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The kind of message a decode describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Routine or special surface observation.
    #[serde(alias = "speci")]
    Metar,
    /// Terminal aerodrome forecast.
    Taf,
    /// Notice to airmen.
    Notam,
    /// The decoder could not tell.
    #[default]
    #[serde(other)]
    Unknown,
}

impl MessageType {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metar => "metar",
            Self::Taf => "taf",
            Self::Notam => "notam",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day-of-month and time in UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtcTime {
    /// Day of month.
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

/// A forecast validity window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityPeriod {
    /// Start of the window.
    pub from: UtcTime,
    /// End of the window.
    pub to: UtcTime,
}

/// Surface wind.
///
/// Accepts both the parsed shape (`speed`, `gust`, `unit`) and the normalized
/// shape (`speed_kt`, `gust_kt`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    /// Mean direction in degrees; `None` when variable.
    pub direction_deg: Option<u16>,
    /// Whether the direction was reported as variable.
    pub variable: bool,
    /// Mean speed.
    #[serde(alias = "speed")]
    pub speed_kt: u16,
    /// Gust speed, if any.
    #[serde(alias = "gust")]
    pub gust_kt: Option<u16>,
    /// Speed unit as reported (`KT`, `MPS`); absent once normalized.
    pub unit: Option<String>,
}

/// Variable wind direction sector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindVariation {
    /// Sector start in degrees.
    pub from_deg: u16,
    /// Sector end in degrees.
    pub to_deg: u16,
}

/// Prevailing visibility as reported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    /// Distance in `unit`.
    pub distance: u32,
    /// `M` or `SM`.
    pub unit: String,
    /// The raw group (`9999`, `CAVOK`, `10SM`).
    pub raw: String,
}

/// One cloud layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudLayer {
    /// Amount code (`FEW`, `SCT`, `BKN`, `OVC`, `VV`).
    pub amount: String,
    /// Base height in feet.
    pub height_ft: Option<u32>,
    /// Convective type (`CB`, `TCU`).
    pub cloud_type: Option<String>,
    /// The raw group.
    pub raw: String,
}

/// Temperature and dewpoint in whole degrees Celsius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperaturePair {
    /// Air temperature.
    pub temperature_c: i32,
    /// Dewpoint.
    pub dewpoint_c: i32,
}

/// A pressure reading in its reported unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pressure {
    /// Reported value.
    pub value: f64,
    /// Reported unit (`hPa`, `inHg`).
    pub unit: String,
}

/// RVR trend indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RvrTendency {
    /// Improving.
    Up,
    /// Deteriorating.
    Down,
    /// No distinct change.
    NoChange,
    /// Not reported.
    #[default]
    #[serde(other)]
    None,
}

/// Runway visual range for one runway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rvr {
    /// Runway designator (`27L`).
    pub runway: String,
    /// Visual range in metres.
    pub vis_m: u32,
    /// Upper bound of a variable range.
    pub vis_vary_m: Option<u32>,
    /// Reported tendency.
    #[serde(deserialize_with = "nullable")]
    pub tendency: RvrTendency,
}

/// A BECMG/TEMPO group inside a TAF, as parsed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trend {
    /// `BECMG` or `TEMPO`.
    pub kind: String,
    /// Period the group applies to.
    pub period: Option<ValidityPeriod>,
    /// Forecast wind.
    pub wind: Option<Wind>,
    /// Forecast visibility.
    pub visibility: Option<Visibility>,
    /// Forecast weather groups.
    #[serde(deserialize_with = "nullable")]
    pub weather: Vec<String>,
    /// Forecast cloud layers.
    #[serde(deserialize_with = "nullable")]
    pub clouds: Vec<CloudLayer>,
    /// Tokens the decoder did not recognise.
    #[serde(deserialize_with = "nullable")]
    pub raw_tokens: Vec<String>,
}

/// A BECMG/TEMPO group inside a TAF, in SI units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendNormalized {
    /// `BECMG` or `TEMPO`.
    pub kind: String,
    /// Period the group applies to.
    pub period: Option<ValidityPeriod>,
    /// Wind in knots.
    pub wind: Option<Wind>,
    /// Visibility in metres.
    pub visibility_m: Option<u32>,
    /// Forecast weather groups.
    #[serde(deserialize_with = "nullable")]
    pub weather: Vec<String>,
    /// Forecast cloud layers.
    #[serde(deserialize_with = "nullable")]
    pub clouds: Vec<CloudLayer>,
}

/// The `parsed` section: every per-type field the decoder may fill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parsed {
    /// ICAO station identifier.
    pub station: Option<String>,
    /// Issue time.
    pub issue_time: Option<UtcTime>,
    /// TAF validity window.
    pub validity: Option<ValidityPeriod>,
    /// Wind as reported.
    pub wind: Option<Wind>,
    /// Variable wind sector.
    pub wind_variation: Option<WindVariation>,
    /// Visibility as reported.
    pub visibility: Option<Visibility>,
    /// RVR groups as reported.
    #[serde(deserialize_with = "nullable")]
    pub rvr: Vec<Rvr>,
    /// Present or forecast weather groups.
    #[serde(deserialize_with = "nullable")]
    pub weather: Vec<String>,
    /// Cloud layers.
    #[serde(deserialize_with = "nullable")]
    pub clouds: Vec<CloudLayer>,
    /// Temperature and dewpoint.
    pub temperature: Option<TemperaturePair>,
    /// TAF temperature extreme groups (`TX25/1514Z`).
    #[serde(deserialize_with = "nullable")]
    pub temperatures: Vec<String>,
    /// QNH.
    pub pressure_qnh: Option<Pressure>,
    /// Altimeter setting.
    pub altimeter: Option<Pressure>,
    /// METAR trend keyword (`NOSIG`, `BECMG`, `TEMPO`).
    pub trend: Option<String>,
    /// TAF change groups.
    #[serde(deserialize_with = "nullable")]
    pub trends: Vec<Trend>,
    /// Remark section text after `RMK`.
    pub rmk_raw: Option<String>,
    /// Remark section tokens.
    #[serde(deserialize_with = "nullable")]
    pub rmk_tokens: Vec<String>,
    /// Tokens the decoder did not recognise.
    #[serde(deserialize_with = "nullable")]
    pub raw_tokens: Vec<String>,
    /// NOTAM Q-line without its `Q)` tag.
    pub q_line: Option<String>,
    /// NOTAM item A (location).
    pub a: Option<String>,
    /// NOTAM item B (start of validity).
    pub b: Option<String>,
    /// NOTAM item C (end of validity).
    pub c: Option<String>,
    /// NOTAM item D (schedule).
    pub d: Option<String>,
    /// NOTAM item E (body text).
    pub e: Option<String>,
    /// NOTAM item F (lower limit).
    pub f: Option<String>,
    /// NOTAM item G (upper limit).
    pub g: Option<String>,
}

/// The `normalized` section: the SI-unit subset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalized {
    /// ICAO station identifier.
    pub station: Option<String>,
    /// Wind in knots.
    pub wind: Option<Wind>,
    /// Variable wind sector.
    pub wind_variation: Option<WindVariation>,
    /// Visibility in metres.
    pub visibility_m: Option<u32>,
    /// RVR per runway.
    #[serde(deserialize_with = "nullable")]
    pub rvr: Vec<Rvr>,
    /// Present weather groups.
    #[serde(deserialize_with = "nullable")]
    pub weather: Vec<String>,
    /// QNH in hectopascals.
    pub pressure_hpa: Option<f64>,
    /// Altimeter setting in inches of mercury.
    pub pressure_inhg: Option<f64>,
    /// TAF change groups in SI units.
    #[serde(deserialize_with = "nullable")]
    pub trends: Vec<TrendNormalized>,
}

/// A decoder warning or error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Offending token.
    pub token: Option<String>,
}

/// A decoded message, as delivered by the external decoder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredMessage {
    /// The original message text.
    pub raw: String,
    /// Detected message type.
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Type actually used to parse, when the caller forced one.
    pub final_type: Option<MessageType>,
    /// Per-type parse.
    #[serde(deserialize_with = "nullable")]
    pub parsed: Parsed,
    /// SI-unit subset.
    #[serde(deserialize_with = "nullable")]
    pub normalized: Normalized,
    /// Decoder warnings.
    #[serde(deserialize_with = "nullable")]
    pub warnings: Vec<Issue>,
    /// Decoder errors.
    #[serde(deserialize_with = "nullable")]
    pub errors: Vec<Issue>,
}

impl StructuredMessage {
    /// Reads one message from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::MessageFormat`] error if the document is not a
    /// JSON object of the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::from_json(&e, "message", ErrorKind::MessageFormat))
    }

    /// Reads a document holding either one message or an array of messages.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::MessageFormat`] error if the document is neither.
    pub fn many_from_json_str(json: &str) -> Result<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| Error::from_json(&e, "message", ErrorKind::MessageFormat))?;
        let result = if value.is_array() {
            serde_json::from_value(value)
        } else {
            serde_json::from_value(value).map(|one| vec![one])
        };
        result.map_err(|e| Error::from_json(&e, "message", ErrorKind::MessageFormat))
    }

    /// The type to explain this message as: `final_type` wins when known.
    #[must_use]
    pub fn effective_type(&self) -> MessageType {
        match self.final_type {
            Some(kind) if kind != MessageType::Unknown => kind,
            _ => self.message_type,
        }
    }

    /// The whitespace-delimited token stream of `raw`, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.raw.split_whitespace()
    }

    /// Returns true when there is nothing to classify or explain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty() && self.parsed == Parsed::default()
    }

    /// Station code from the normalized section, then the parsed section,
    /// then NOTAM item A.
    #[must_use]
    pub fn station_code(&self) -> Option<&str> {
        self.normalized
            .station
            .as_deref()
            .or(self.parsed.station.as_deref())
            .or(self.parsed.a.as_deref())
    }
}

/// Display names for a station, supplied by an external station dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationInfo {
    /// ICAO code.
    pub code: String,
    /// English name.
    pub name_en: Option<String>,
    /// Name in the local language.
    pub name_local: Option<String>,
    /// Simplified Chinese name.
    pub name_zh: Option<String>,
}

impl StationInfo {
    /// Reads a station document: one entry or an array of entries.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::MessageFormat`] error if the document is not
    /// station data or an entry has no code.
    pub fn many_from_json_str(json: &str, source: &str) -> Result<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| Error::from_json(&e, source, ErrorKind::MessageFormat))?;
        let stations: Vec<Self> = if value.is_array() {
            serde_json::from_value(value)
        } else {
            serde_json::from_value(value).map(|one| vec![one])
        }
        .map_err(|e| Error::from_json(&e, source, ErrorKind::MessageFormat))?;

        if let Some(index) = stations.iter().position(|s| s.code.trim().is_empty()) {
            return Err(Error::message_format(format!(
                "{source}: station entry {index} has no code"
            )));
        }
        Ok(stations)
    }

    /// The best name for `locale`, if any.
    #[must_use]
    pub fn name_for(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.name_en.as_deref().or(self.name_local.as_deref()),
            Locale::ZhCn => self
                .name_zh
                .as_deref()
                .or(self.name_en.as_deref())
                .or(self.name_local.as_deref()),
        }
    }

    /// `CODE · Name`, or the bare code when no name is known.
    #[must_use]
    pub fn display(&self, locale: Locale) -> String {
        match self.name_for(locale) {
            Some(name) if !name.is_empty() => format!("{} · {name}", self.code),
            _ => self.code.clone(),
        }
    }
}
