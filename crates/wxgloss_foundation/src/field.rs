//! Field identities shared by the classifier and the explainer.
//!
//! A [`FieldKey`] renders to the string identity used at the join step
//! (`station`, `rvr_0`, `trend_cloud_1_0`). Indexed families carry their
//! indices; the classifier degrades to the un-indexed form when it cannot
//! pin a token to one element, and [`FieldKey::covers`] lets that form join
//! with any member of the family.

use std::fmt;

use serde::{Serialize, Serializer};

/// A lettered NOTAM item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NotamItem {
    /// A) location.
    A,
    /// B) start of validity.
    B,
    /// C) end of validity.
    C,
    /// D) schedule.
    D,
    /// E) body text.
    E,
    /// F) lower limit.
    F,
    /// G) upper limit.
    G,
}

impl NotamItem {
    /// All items in message order.
    pub const ALL: [NotamItem; 7] = [
        NotamItem::A,
        NotamItem::B,
        NotamItem::C,
        NotamItem::D,
        NotamItem::E,
        NotamItem::F,
        NotamItem::G,
    ];

    /// Lowercase letter used in field keys.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
        }
    }

    /// Parses an item letter in either case.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|item| item.letter() == letter.to_ascii_lowercase())
    }
}

/// The semantic identity of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// `METAR`, `SPECI`, `TAF`, `NOTAM`.
    ReportType,
    /// Station identifier.
    Station,
    /// Issue time.
    Issue,
    /// TAF validity window.
    Validity,
    /// Surface wind.
    Wind,
    /// Variable wind sector.
    WindVariation,
    /// Prevailing visibility.
    Visibility,
    /// RVR for the runway at this index of the normalized RVR list.
    Rvr(Option<usize>),
    /// Present or forecast weather.
    Weather,
    /// Cloud layers.
    Clouds,
    /// METAR temperature/dewpoint pair.
    Temperature,
    /// The n-th TAF temperature extreme.
    TemperatureExtreme(usize),
    /// QNH.
    Pressure,
    /// Altimeter setting.
    Altimeter,
    /// METAR trend keyword.
    Trend,
    /// TAF change-group summary and keywords.
    Trends,
    /// Period of the n-th TAF change group.
    TrendPeriod(usize),
    /// Wind of the n-th TAF change group.
    TrendWind(usize),
    /// Visibility of the n-th TAF change group.
    TrendVisibility(usize),
    /// Weather of a TAF change group, optionally pinned to one group.
    TrendWeather(usize, Option<usize>),
    /// Cloud of a TAF change group, optionally pinned to one layer.
    TrendCloud(usize, Option<usize>),
    /// The `RMK` marker and the remark text.
    Remark,
    /// One remark token.
    RemarkItem(Option<usize>),
    /// Tokens the decoder left unrecognised.
    RawTokens,
    /// The NOTAM Q-line as a whole.
    QLineFull,
    /// One of the eight Q-line parts.
    QLinePart(usize),
    /// A lettered NOTAM item.
    Notam(NotamItem),
}

impl FieldKey {
    /// The family name shared by every index of this key.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        match self {
            Self::ReportType => "report_type",
            Self::Station => "station",
            Self::Issue => "issue",
            Self::Validity => "validity",
            Self::Wind => "wind",
            Self::WindVariation => "wind_variation",
            Self::Visibility => "visibility",
            Self::Rvr(_) => "rvr",
            Self::Weather => "weather",
            Self::Clouds => "clouds",
            Self::Temperature | Self::TemperatureExtreme(_) => "temp",
            Self::Pressure => "pressure",
            Self::Altimeter => "altimeter",
            Self::Trend => "trend",
            Self::Trends => "trends",
            Self::TrendPeriod(_) => "trend_period",
            Self::TrendWind(_) => "trend_wind",
            Self::TrendVisibility(_) => "trend_visibility",
            Self::TrendWeather(..) => "trend_weather",
            Self::TrendCloud(..) => "trend_cloud",
            Self::Remark => "rmk",
            Self::RemarkItem(_) => "rmk_item",
            Self::RawTokens => "raw",
            Self::QLineFull => "q_line_full",
            Self::QLinePart(_) => "q_line",
            Self::Notam(NotamItem::A) => "a",
            Self::Notam(NotamItem::B) => "b",
            Self::Notam(NotamItem::C) => "c",
            Self::Notam(NotamItem::D) => "d",
            Self::Notam(NotamItem::E) => "e",
            Self::Notam(NotamItem::F) => "f",
            Self::Notam(NotamItem::G) => "g",
        }
    }

    /// Returns true for keys that belong to a repeating structure.
    #[must_use]
    pub const fn is_indexed(&self) -> bool {
        matches!(
            self,
            Self::Rvr(_)
                | Self::TemperatureExtreme(_)
                | Self::TrendPeriod(_)
                | Self::TrendWind(_)
                | Self::TrendVisibility(_)
                | Self::TrendWeather(..)
                | Self::TrendCloud(..)
                | Self::RemarkItem(_)
                | Self::QLinePart(_)
        )
    }

    /// Returns true when an explained field keyed `other` describes a token
    /// classified as `self`: either the keys are equal, or `self` is the
    /// un-indexed form of `other`'s family.
    #[must_use]
    pub fn covers(&self, other: &FieldKey) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Self::Rvr(None), Self::Rvr(Some(_)))
            | (Self::RemarkItem(None), Self::RemarkItem(Some(_))) => true,
            (Self::TrendWeather(a, None), Self::TrendWeather(b, Some(_)))
            | (Self::TrendCloud(a, None), Self::TrendCloud(b, Some(_))) => a == b,
            _ => false,
        }
    }

    /// Catalog key of the short label the classifier shows for this field.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::ReportType => "analysis.labels.report_type",
            Self::Station => "analysis.labels.station",
            Self::Issue => "analysis.labels.issue_time",
            Self::Validity => "analysis.labels.validity",
            Self::Wind => "analysis.labels.wind",
            Self::WindVariation => "analysis.labels.wind_variation",
            Self::Visibility => "analysis.labels.visibility",
            Self::Rvr(_) => "analysis.labels.rvr",
            Self::Weather => "analysis.labels.weather",
            Self::Clouds => "analysis.labels.clouds",
            Self::Temperature | Self::TemperatureExtreme(_) => "analysis.labels.temperature",
            Self::Pressure => "analysis.labels.pressure",
            Self::Altimeter => "fields.pressure_altimeter",
            Self::Trend | Self::Trends => "analysis.labels.trend",
            Self::TrendPeriod(_) => "analysis.labels.trend_period",
            Self::TrendWind(_) => "analysis.labels.trend_wind",
            Self::TrendVisibility(_) => "analysis.labels.trend_visibility",
            Self::TrendWeather(..) => "analysis.labels.trend_weather",
            Self::TrendCloud(..) => "analysis.labels.trend_clouds",
            Self::Remark | Self::RemarkItem(_) => "analysis.labels.remark",
            Self::RawTokens => "analysis.labels.unknown",
            Self::QLineFull | Self::QLinePart(_) | Self::Notam(_) => "analysis.labels.notam",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = self.family();
        match self {
            Self::Rvr(Some(i))
            | Self::RemarkItem(Some(i))
            | Self::TemperatureExtreme(i)
            | Self::TrendPeriod(i)
            | Self::TrendWind(i)
            | Self::TrendVisibility(i)
            | Self::QLinePart(i)
            | Self::TrendWeather(i, None)
            | Self::TrendCloud(i, None) => write!(f, "{family}_{i}"),
            Self::TrendWeather(i, Some(j)) | Self::TrendCloud(i, Some(j)) => {
                write!(f, "{family}_{i}_{j}")
            }
            _ => f.write_str(family),
        }
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
