//! TAF temperature extreme groups (`TX25/1514Z`, `TNM03/1606Z`).

use std::sync::LazyLock;

use regex::Regex;
use wxgloss_lexicon::{Localizer, tr};

static EXTREME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^T([XN])(M?)(\d{2})/(\d{2})(\d{2})Z$").expect("temperature extreme regex")
});

/// Whether a group forecasts the maximum or minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremeKind {
    /// `TX`
    Max,
    /// `TN`
    Min,
}

/// A decoded temperature extreme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemperatureExtreme {
    /// Maximum or minimum.
    pub kind: ExtremeKind,
    /// Temperature in whole degrees Celsius.
    pub celsius: i32,
    /// Day of month.
    pub day: u8,
    /// Hour (UTC).
    pub hour: u8,
}

impl TemperatureExtreme {
    /// Parses a `T{X|N}[M]DD/DDHHZ` group.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let caps = EXTREME_RE.captures(token.trim())?;
        let kind = if caps[1].eq_ignore_ascii_case("X") {
            ExtremeKind::Max
        } else {
            ExtremeKind::Min
        };
        let magnitude: i32 = caps[3].parse().ok()?;
        let celsius = if caps[2].is_empty() { magnitude } else { -magnitude };
        Some(Self {
            kind,
            celsius,
            day: caps[4].parse().ok()?,
            hour: caps[5].parse().ok()?,
        })
    }

    /// Localized sentence, e.g. "Forecast maximum temperature 25°C at 15 14:00 UTC."
    #[must_use]
    pub fn explain(&self, loc: &dyn Localizer) -> String {
        let kind = match self.kind {
            ExtremeKind::Max => tr!(loc, "taf.temp.max"),
            ExtremeKind::Min => tr!(loc, "taf.temp.min"),
        };
        let temp = format!("{}°C", self.celsius);
        let time = format!("{:02} {:02}:00 UTC", self.day, self.hour);
        tr!(loc, "taf.temp.explain", kind = kind, temp = temp, time = time)
    }
}

/// Returns true for tokens shaped like a temperature extreme group.
#[must_use]
pub fn is_extreme_group(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    upper.starts_with("TX") || upper.starts_with("TN")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxgloss_foundation::Locale;
    use wxgloss_lexicon::Catalog;

    #[test]
    fn parses_max_and_min() {
        assert_eq!(
            TemperatureExtreme::parse("TX25/1514Z"),
            Some(TemperatureExtreme { kind: ExtremeKind::Max, celsius: 25, day: 15, hour: 14 })
        );
        assert_eq!(
            TemperatureExtreme::parse("TNM03/1606Z"),
            Some(TemperatureExtreme { kind: ExtremeKind::Min, celsius: -3, day: 16, hour: 6 })
        );
        assert_eq!(TemperatureExtreme::parse("TX25/15"), None);
        assert_eq!(TemperatureExtreme::parse("TXM/1514Z"), None);
    }

    #[test]
    fn explains() {
        let en = Catalog::builtin(Locale::En);
        let extreme = TemperatureExtreme::parse("TNM03/1606Z").unwrap();
        assert_eq!(extreme.explain(&en), "Forecast minimum temperature -3°C at 16 06:00 UTC.");
    }

    #[test]
    fn shape_check() {
        assert!(is_extreme_group("TX25/1514Z"));
        assert!(is_extreme_group("tn05/0103z"));
        assert!(!is_extreme_group("TEMPO"));
    }
}
