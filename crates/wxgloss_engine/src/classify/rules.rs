//! The ordered classification rule table.
//!
//! Rules are tried top to bottom and the first whose scope admits the message
//! type and whose predicate holds assigns the key. Tokens no rule claims are
//! raw tokens.

use std::sync::LazyLock;

use regex::Regex;
use wxgloss_decode::taf::is_extreme_group;
use wxgloss_foundation::{CloudLayer, FieldKey, MessageType, NotamItem, Parsed};

use super::state::{REMARK_MARKER, ScanState};
use crate::view::MessageView;

static REPORT_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:METAR|SPECI|TAF|NOTAM[NRC]?)$").expect("report type regex"));
static ISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}Z$").expect("issue time regex"));
static VALIDITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}/\d{4}$").expect("validity regex"));
static WIND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:VRB|\d{3})\d{2,3}(?:G\d{2,3})?(?:KT|MPS|KMH)$").expect("wind regex")
});
static WIND_VARIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}V\d{3}$").expect("wind variation regex"));
static RVR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^R(\d{2}[LRC]?)/[PM]?\d{4}(?:V[PM]?\d{4})?(?:FT)?/?[UDN]?$").expect("rvr regex")
});
static VISIBILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:CAVOK|\d{4}(?:NDV)?|[PM]?(?:\d{1,2}|\d{1,2}/\d{1,2})SM)$")
        .expect("visibility regex")
});
static QNH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Q\d{4}$").expect("qnh regex"));
static ALTIMETER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A\d{4}$").expect("altimeter regex"));
static TEMPERATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M?\d{2}/M?\d{2}$").expect("temperature regex"));
static CLOUD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(FEW|SCT|BKN|OVC|VV)(\d{3}|///)").expect("cloud regex")
});
static NOTAM_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-GQ])\)").expect("notam marker regex"));

const NO_CLOUD: [&str; 4] = ["NSC", "NCD", "SKC", "CLR"];
const TREND_KEYWORDS: [&str; 3] = ["NOSIG", "BECMG", "TEMPO"];

/// Which message types a rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scope {
    Any,
    /// METAR, SPECI and TAF (and undetected types).
    Report,
    Taf,
    Notam,
}

impl Scope {
    fn admits(self, kind: MessageType) -> bool {
        match self {
            Self::Any => true,
            Self::Report => kind != MessageType::Notam,
            Self::Taf => kind == MessageType::Taf,
            Self::Notam => kind == MessageType::Notam,
        }
    }
}

/// What a rule sees for one token.
pub(crate) struct Probe<'a> {
    pub(crate) token: &'a str,
    pub(crate) upper: &'a str,
    pub(crate) view: &'a MessageView<'a>,
    pub(crate) kind: MessageType,
    pub(crate) state: &'a ScanState,
}

impl Probe<'_> {
    fn parsed(&self) -> &Parsed {
        &self.view.message().parsed
    }

    fn trend_index(&self) -> Option<usize> {
        if self.kind == MessageType::Taf {
            self.state.trend.index()
        } else {
            None
        }
    }
}

pub(crate) struct Rule {
    pub(crate) name: &'static str,
    scope: Scope,
    matches: fn(&Probe<'_>) -> bool,
    pub(crate) assign: fn(&Probe<'_>) -> FieldKey,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "report_type",
        scope: Scope::Any,
        matches: |p| p.state.notam_section.is_none() && REPORT_TYPE_RE.is_match(p.upper),
        assign: |_| FieldKey::ReportType,
    },
    Rule {
        name: "station",
        scope: Scope::Report,
        matches: |p| {
            p.view
                .message()
                .station_code()
                .is_some_and(|code| code.eq_ignore_ascii_case(p.token))
        },
        assign: |_| FieldKey::Station,
    },
    Rule {
        name: "issue_time",
        scope: Scope::Report,
        matches: |p| p.parsed().issue_time.is_some() && ISSUE_RE.is_match(p.upper),
        assign: |_| FieldKey::Issue,
    },
    Rule {
        name: "validity",
        scope: Scope::Taf,
        matches: |p| VALIDITY_RE.is_match(p.upper),
        assign: |p| match p.trend_index() {
            Some(i) if p.view.trend_period(i).is_some() => FieldKey::TrendPeriod(i),
            Some(_) => FieldKey::Trends,
            None => FieldKey::Validity,
        },
    },
    Rule {
        name: "temperature_extreme",
        scope: Scope::Taf,
        matches: |p| is_extreme_group(p.upper) && extreme_index(p).is_some(),
        assign: |p| extreme_index(p).map_or(FieldKey::RawTokens, FieldKey::TemperatureExtreme),
    },
    Rule {
        name: "wind",
        scope: Scope::Report,
        matches: |p| WIND_RE.is_match(p.upper),
        assign: |p| match p.trend_index() {
            Some(i) if p.view.trend_wind(i).is_some() => FieldKey::TrendWind(i),
            Some(_) => FieldKey::Trends,
            None => FieldKey::Wind,
        },
    },
    Rule {
        name: "wind_variation",
        scope: Scope::Report,
        matches: |p| WIND_VARIATION_RE.is_match(p.upper),
        assign: |_| FieldKey::WindVariation,
    },
    Rule {
        name: "rvr",
        scope: Scope::Report,
        matches: |p| RVR_RE.is_match(p.upper),
        assign: |p| FieldKey::Rvr(rvr_index(p)),
    },
    Rule {
        name: "visibility",
        scope: Scope::Report,
        matches: |p| VISIBILITY_RE.is_match(p.upper),
        assign: |p| match p.trend_index() {
            Some(i) if p.view.trend_visibility(i).is_some() => FieldKey::TrendVisibility(i),
            Some(_) => FieldKey::Trends,
            None => FieldKey::Visibility,
        },
    },
    Rule {
        name: "qnh",
        scope: Scope::Report,
        matches: |p| QNH_RE.is_match(p.upper),
        assign: |_| FieldKey::Pressure,
    },
    Rule {
        name: "altimeter",
        scope: Scope::Report,
        matches: |p| ALTIMETER_RE.is_match(p.upper),
        assign: |_| FieldKey::Altimeter,
    },
    Rule {
        name: "temperature",
        scope: Scope::Report,
        matches: |p| TEMPERATURE_RE.is_match(p.upper),
        assign: |_| FieldKey::Temperature,
    },
    Rule {
        name: "cloud",
        scope: Scope::Report,
        matches: |p| CLOUD_RE.is_match(p.upper) || NO_CLOUD.contains(&p.upper),
        assign: |p| match p.trend_index() {
            Some(i) => {
                let layers = p.view.trend_clouds(i);
                match match_cloud_layer(p.upper, layers) {
                    Some(j) => FieldKey::TrendCloud(i, Some(j)),
                    None if !layers.is_empty() => FieldKey::TrendCloud(i, None),
                    None => FieldKey::Trends,
                }
            }
            None => FieldKey::Clouds,
        },
    },
    Rule {
        name: "weather",
        scope: Scope::Report,
        matches: |p| {
            trend_weather_index(p).is_some() || contains_code(&p.parsed().weather, p.upper)
        },
        assign: |p| match (p.trend_index(), trend_weather_index(p)) {
            (Some(i), Some(j)) => FieldKey::TrendWeather(i, Some(j)),
            _ => FieldKey::Weather,
        },
    },
    Rule {
        name: "remark",
        scope: Scope::Report,
        matches: |p| {
            p.upper == REMARK_MARKER
                || p.state.in_remarks()
                || p.parsed().rmk_tokens.iter().any(|t| t == p.token)
        },
        assign: |p| {
            if p.upper == REMARK_MARKER {
                return FieldKey::Remark;
            }
            remark_index(p).map_or(FieldKey::Remark, |j| FieldKey::RemarkItem(Some(j)))
        },
    },
    Rule {
        name: "trend_keyword",
        scope: Scope::Report,
        matches: |p| {
            TREND_KEYWORDS.contains(&p.upper)
                || p.parsed().trend.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(p.upper))
        },
        assign: |p| {
            if p.kind == MessageType::Taf {
                FieldKey::Trends
            } else {
                FieldKey::Trend
            }
        },
    },
    Rule {
        name: "notam_marker",
        scope: Scope::Notam,
        matches: |p| NOTAM_MARKER_RE.is_match(p.upper),
        assign: |p| {
            let letter = p.upper.chars().next().unwrap_or('Q');
            NotamItem::from_letter(letter).map_or(FieldKey::QLineFull, FieldKey::Notam)
        },
    },
    Rule {
        name: "notam_continuation",
        scope: Scope::Notam,
        matches: |p| p.state.notam_section.is_some(),
        assign: |p| p.state.notam_section.unwrap_or(FieldKey::RawTokens),
    },
];

/// The first rule that claims the probe's token.
pub(crate) fn first_match(probe: &Probe<'_>) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.scope.admits(probe.kind) && (rule.matches)(probe))
}

fn contains_code(codes: &[String], upper: &str) -> bool {
    codes.iter().any(|code| code.eq_ignore_ascii_case(upper))
}

fn extreme_index(p: &Probe<'_>) -> Option<usize> {
    let groups = &p.parsed().temperatures;
    groups
        .iter()
        .position(|group| group.eq_ignore_ascii_case(p.upper))
        .or_else(|| (p.state.extremes_seen < groups.len()).then_some(p.state.extremes_seen))
}

fn rvr_index(p: &Probe<'_>) -> Option<usize> {
    let runway = RVR_RE.captures(p.upper)?.get(1)?.as_str();
    let index = p.view.rvr().iter().position(|rvr| rvr.runway == runway);
    if index.is_none() {
        tracing::debug!(token = p.token, runway, "RVR token matches no structured runway");
    }
    index
}

fn trend_weather_index(p: &Probe<'_>) -> Option<usize> {
    let i = p.trend_index()?;
    p.view
        .trend_weather(i)
        .iter()
        .position(|code| code.eq_ignore_ascii_case(p.upper))
}

fn remark_index(p: &Probe<'_>) -> Option<usize> {
    let tokens = &p.parsed().rmk_tokens;
    match p.state.remark_cursor {
        Some(cursor) => tokens
            .iter()
            .skip(cursor)
            .position(|t| t == p.token)
            .map(|offset| cursor + offset),
        None => tokens.iter().position(|t| t == p.token),
    }
}

/// Index of the first layer with the token's amount and base height.
///
/// Heights in the token are hundreds of feet and must match exactly; amount
/// codes without a height (`NSC`, `SKC`) match on the amount alone.
pub(crate) fn match_cloud_layer(upper: &str, layers: &[CloudLayer]) -> Option<usize> {
    if NO_CLOUD.contains(&upper) {
        return layers
            .iter()
            .position(|layer| layer.amount.eq_ignore_ascii_case(upper));
    }
    let caps = CLOUD_RE.captures(upper)?;
    let amount = caps.get(1)?.as_str();
    let height = caps.get(2)?.as_str().parse::<u32>().ok()?.checked_mul(100)?;
    let index = layers.iter().position(|layer| {
        let layer_amount = layer.amount.to_ascii_uppercase();
        layer_amount.starts_with(amount) && layer.height_ft == Some(height)
    });
    if index.is_none() {
        tracing::debug!(token = upper, "cloud token matches no structured layer");
    }
    index
}
