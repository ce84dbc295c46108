//! METAR remark groups.
//!
//! Each decoder is a closed-form function of a fixed-width group and returns
//! `None` when the token does not have its shape.

use std::sync::LazyLock;

use regex::Regex;
use wxgloss_lexicon::{Localizer, tr};

static SLP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SLP(\d{3})$").expect("sea-level pressure regex"));

static TEMP_DEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^T(?:([01])(\d{3})|////)(?:([01])(\d{3})|////)?$")
        .expect("temperature group regex")
});

static PRECIP_1H_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^P(\d{4})$").expect("precipitation regex"));

/// A decoded remark group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemarkGroup {
    /// Automated station without a precipitation discriminator.
    Ao1,
    /// Automated station with a precipitation discriminator.
    Ao2,
    /// Sea-level pressure (`1013.4 hPa`).
    SeaLevelPressure(String),
    /// Temperature and dewpoint to a tenth of a degree (`1.2°C`).
    TemperatureDewpoint {
        /// Air temperature.
        temperature: Option<String>,
        /// Dewpoint.
        dewpoint: Option<String>,
    },
    /// Precipitation in the last hour, in inches (`1.25`).
    HourlyPrecipitation(String),
}

impl RemarkGroup {
    /// Decodes one remark token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("AO1") {
            return Some(Self::Ao1);
        }
        if token.eq_ignore_ascii_case("AO2") {
            return Some(Self::Ao2);
        }
        if let Some(pressure) = sea_level_pressure(token) {
            return Some(Self::SeaLevelPressure(pressure));
        }
        if let Some((temperature, dewpoint)) = temperature_dewpoint(token) {
            return Some(Self::TemperatureDewpoint {
                temperature,
                dewpoint,
            });
        }
        hourly_precipitation(token).map(Self::HourlyPrecipitation)
    }

    /// Localized sentence for this group.
    #[must_use]
    pub fn explain(&self, loc: &dyn Localizer) -> String {
        match self {
            Self::Ao1 => tr!(loc, "remark.ao1"),
            Self::Ao2 => tr!(loc, "remark.ao2"),
            Self::SeaLevelPressure(pressure) => tr!(loc, "remark.slp", pressure = pressure),
            Self::TemperatureDewpoint {
                temperature: Some(temp),
                dewpoint: Some(dew),
            } => tr!(loc, "remark.temp_dewpoint", temp = temp, dew = dew),
            Self::TemperatureDewpoint {
                temperature: Some(temp),
                dewpoint: None,
            } => tr!(loc, "remark.temp_only", temp = temp),
            Self::TemperatureDewpoint {
                temperature: None,
                dewpoint: Some(dew),
            } => tr!(loc, "remark.dew_only", dew = dew),
            Self::TemperatureDewpoint {
                temperature: None,
                dewpoint: None,
            } => String::new(),
            Self::HourlyPrecipitation(amount) => tr!(loc, "remark.precip_1h", amount = amount),
        }
    }
}

/// Explains a remark token, or echoes it when it is not a known group.
#[must_use]
pub fn explain_remark(token: &str, loc: &dyn Localizer) -> String {
    RemarkGroup::parse(token)
        .map(|group| group.explain(loc))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| token.to_string())
}

/// `SLPnnn`: values of 500 and above are in the 900s, the rest in the 1000s.
#[must_use]
pub fn sea_level_pressure(token: &str) -> Option<String> {
    let caps = SLP_RE.captures(token)?;
    let value: u32 = caps[1].parse().ok()?;
    let tenths = if value >= 500 { 9_000 + value } else { 10_000 + value };
    Some(format!("{}.{} hPa", tenths / 10, tenths % 10))
}

/// `TsTTTsDDD`: sign digit (`1` is negative) then tenths of a degree, for
/// temperature and then dewpoint. A half reported as `////` is missing, and
/// the dewpoint half may be left off. `None` unless at least one half is
/// present.
#[must_use]
pub fn temperature_dewpoint(token: &str) -> Option<(Option<String>, Option<String>)> {
    let caps = TEMP_DEW_RE.captures(token)?;
    let half = |sign_at: usize, digits_at: usize| {
        match (caps.get(sign_at), caps.get(digits_at)) {
            (Some(sign), Some(digits)) => signed_tenths(sign.as_str(), digits.as_str()),
            _ => None,
        }
    };
    match (half(1, 2), half(3, 4)) {
        (None, None) => None,
        halves => Some(halves),
    }
}

fn signed_tenths(sign: &str, digits: &str) -> Option<String> {
    let magnitude: u32 = digits.parse().ok()?;
    let minus = if sign == "1" && magnitude > 0 { "-" } else { "" };
    Some(format!("{minus}{}.{}°C", magnitude / 10, magnitude % 10))
}

/// `Pnnnn`: hundredths of an inch.
#[must_use]
pub fn hourly_precipitation(token: &str) -> Option<String> {
    let caps = PRECIP_1H_RE.captures(token)?;
    let hundredths: u32 = caps[1].parse().ok()?;
    Some(format!("{}.{:02}", hundredths / 100, hundredths % 100))
}
