//! Display formatting for structured values.
//!
//! These are the canonical renderings shared by explanations and token
//! details. Functions that need localized words take a [`Localizer`].

use std::sync::LazyLock;

use regex::Regex;
use wxgloss_foundation::{CloudLayer, Pressure, Rvr, TemperaturePair, UtcTime, ValidityPeriod, Wind};
use wxgloss_lexicon::{Localizer, tr};

static NOTAM_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})\s*(EST)?$").expect("notam time regex")
});

static SCHEDULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{2})(\d{2})-(\d{2})(\d{2})\s*(DLY)?$").expect("schedule regex")
});

/// `DD HH:MM UTC`
#[must_use]
pub fn utc_time(time: &UtcTime) -> String {
    format!("{:02} {:02}:{:02} UTC", time.day, time.hour, time.minute)
}

/// `DD HH:MM UTC - DD HH:MM UTC`
#[must_use]
pub fn validity(period: &ValidityPeriod) -> String {
    format!("{} - {}", utc_time(&period.from), utc_time(&period.to))
}

fn speed_unit(wind: &Wind) -> &'static str {
    match wind.unit.as_deref() {
        Some(unit) if unit.eq_ignore_ascii_case("MPS") => "m/s",
        Some(unit) if unit.eq_ignore_ascii_case("KMH") => "km/h",
        _ => "kt",
    }
}

/// Returns true when the wind has no usable mean direction.
#[must_use]
pub fn is_variable(wind: &Wind) -> bool {
    wind.variable || wind.direction_deg.is_none()
}

/// A speed with the wind's unit (`15kt`).
#[must_use]
pub fn wind_speed(wind: &Wind, speed: u16) -> String {
    format!("{speed}{}", speed_unit(wind))
}

/// Direction and mean speed (`240° 15kt`, `VRB 3kt`).
#[must_use]
pub fn wind_base(wind: &Wind) -> String {
    let speed = wind_speed(wind, wind.speed_kt);
    match wind.direction_deg {
        Some(direction) if !wind.variable => format!("{direction}° {speed}"),
        _ => format!("VRB {speed}"),
    }
}

/// Full wind including gusts (`240° 15kt gust 25kt`).
#[must_use]
pub fn wind(wind: &Wind) -> String {
    match wind.gust_kt {
        Some(gust) if gust > 0 => format!("{} gust {}", wind_base(wind), wind_speed(wind, gust)),
        _ => wind_base(wind),
    }
}

/// Visibility in metres: `>= 10km`, `4.5 km`, or `800 m`.
#[must_use]
pub fn visibility_m(metres: u32) -> String {
    if metres >= 10_000 {
        ">= 10km".to_string()
    } else if metres >= 1_000 {
        format!("{:.1} km", f64::from(metres) / 1000.0)
    } else {
        format!("{metres} m")
    }
}

/// `T°C / D°C`
#[must_use]
pub fn temperature(pair: &TemperaturePair) -> String {
    format!("{}°C / {}°C", pair.temperature_c, pair.dewpoint_c)
}

/// `BKN 2000ft`, `BKN 2000ft CB`, or the bare amount without a height.
#[must_use]
pub fn cloud_layer(layer: &CloudLayer) -> String {
    let mut out = match layer.height_ft {
        Some(height) if height > 0 => format!("{} {height}ft", layer.amount),
        _ => layer.amount.clone(),
    };
    if let Some(kind) = layer.cloud_type.as_deref().filter(|kind| !kind.is_empty()) {
        out.push(' ');
        out.push_str(kind);
    }
    out
}

/// Pressure in its reported unit (`1015 hPa`, `29.92 inHg`).
#[must_use]
pub fn pressure(pressure: &Pressure) -> String {
    format!("{} {}", pressure.value, pressure.unit)
}

/// Normalized QNH with one decimal.
#[must_use]
pub fn pressure_hpa(hpa: f64) -> String {
    format!("{hpa:.1} hPa")
}

/// Normalized altimeter setting with two decimals.
#[must_use]
pub fn pressure_inhg(inhg: f64) -> String {
    format!("{inhg:.2} inHg")
}

/// `550 m`, `550-800 m`, with an optional tendency suffix.
#[must_use]
pub fn rvr(rvr: &Rvr, tendency: Option<&str>) -> String {
    let base = match rvr.vis_vary_m {
        Some(vary) if vary > 0 => format!("{}-{vary} m", rvr.vis_m),
        _ => format!("{} m", rvr.vis_m),
    };
    match tendency {
        Some(text) if !text.is_empty() => format!("{base} ({text})"),
        _ => base,
    }
}

/// `code (meaning)` in the locale's gloss style.
#[must_use]
pub fn gloss(loc: &dyn Localizer, code: &str, meaning: &str) -> String {
    tr!(loc, "gloss", code = code, meaning = meaning)
}

/// A NOTAM `B)`/`C)` value: `YYMMDDHHMM` becomes `20YY-MM-DD HH:MM UTC`,
/// `PERM` becomes "permanent", and a trailing `EST` marks the time as
/// estimated. Anything else is returned unchanged.
#[must_use]
pub fn notam_time(raw: &str, loc: &dyn Localizer) -> String {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("PERM") {
        return tr!(loc, "notam.time.permanent");
    }
    let Some(caps) = NOTAM_TIME_RE.captures(value) else {
        return raw.to_string();
    };
    let time = format!(
        "20{}-{}-{} {}:{} UTC",
        &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
    );
    if caps.get(6).is_some() {
        tr!(loc, "notam.time.estimated", time = time)
    } else {
        time
    }
}

/// A NOTAM `D)` schedule: `HHMM-HHMM` with an optional `DLY` flag.
/// Other schedules are returned trimmed.
#[must_use]
pub fn schedule(raw: &str, loc: &dyn Localizer) -> String {
    let value = raw.trim();
    let Some(caps) = SCHEDULE_RE.captures(value) else {
        return value.to_string();
    };
    let start = format!("{}:{} UTC", &caps[1], &caps[2]);
    let end = format!("{}:{} UTC", &caps[3], &caps[4]);
    if caps.get(5).is_some() {
        tr!(loc, "notam.schedule.daily", start = start, end = end)
    } else {
        tr!(loc, "notam.schedule.range", start = start, end = end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxgloss_foundation::{Locale, RvrTendency};
    use wxgloss_lexicon::Catalog;

    fn wind_of(direction: Option<u16>, speed: u16, gust: Option<u16>) -> Wind {
        Wind {
            direction_deg: direction,
            variable: false,
            speed_kt: speed,
            gust_kt: gust,
            unit: None,
        }
    }

    #[test]
    fn formats_times() {
        let from = UtcTime { day: 5, hour: 6, minute: 0 };
        let to = UtcTime { day: 6, hour: 12, minute: 30 };
        assert_eq!(utc_time(&from), "05 06:00 UTC");
        assert_eq!(validity(&ValidityPeriod { from, to }), "05 06:00 UTC - 06 12:30 UTC");
    }

    #[test]
    fn formats_wind() {
        assert_eq!(wind(&wind_of(Some(240), 15, Some(25))), "240° 15kt gust 25kt");
        assert_eq!(wind(&wind_of(Some(90), 5, None)), "90° 5kt");
        assert_eq!(wind(&wind_of(None, 3, None)), "VRB 3kt");

        let mps = Wind {
            unit: Some("MPS".into()),
            ..wind_of(Some(180), 4, None)
        };
        assert_eq!(wind(&mps), "180° 4m/s");
    }

    #[test]
    fn formats_visibility() {
        assert_eq!(visibility_m(10_000), ">= 10km");
        assert_eq!(visibility_m(4_500), "4.5 km");
        assert_eq!(visibility_m(800), "800 m");
        assert_eq!(visibility_m(0), "0 m");
    }

    #[test]
    fn formats_clouds() {
        let layer = CloudLayer {
            amount: "BKN".into(),
            height_ft: Some(2000),
            cloud_type: None,
            raw: "BKN020".into(),
        };
        assert_eq!(cloud_layer(&layer), "BKN 2000ft");
        let cb = CloudLayer {
            cloud_type: Some("CB".into()),
            ..layer.clone()
        };
        assert_eq!(cloud_layer(&cb), "BKN 2000ft CB");
        let vv = CloudLayer {
            amount: "VV".into(),
            height_ft: None,
            ..layer
        };
        assert_eq!(cloud_layer(&vv), "VV");
    }

    #[test]
    fn formats_pressure() {
        let qnh = Pressure { value: 1015.0, unit: "hPa".into() };
        assert_eq!(pressure(&qnh), "1015 hPa");
        assert_eq!(pressure_hpa(1013.25), "1013.2 hPa");
        assert_eq!(pressure_inhg(29.9), "29.90 inHg");
    }

    #[test]
    fn formats_rvr() {
        let r = Rvr {
            runway: "27L".into(),
            vis_m: 550,
            vis_vary_m: Some(800),
            tendency: RvrTendency::Up,
        };
        assert_eq!(rvr(&r, Some("increasing")), "550-800 m (increasing)");
        assert_eq!(rvr(&Rvr { vis_vary_m: None, ..r }, None), "550 m");
    }

    #[test]
    fn formats_notam_times() {
        let loc = Catalog::builtin(Locale::En);
        assert_eq!(notam_time("2401150800", &loc), "2024-01-15 08:00 UTC");
        assert_eq!(notam_time("2401150800EST", &loc), "2024-01-15 08:00 UTC (estimated)");
        assert_eq!(notam_time("PERM", &loc), "permanent");
        assert_eq!(notam_time("soon", &loc), "soon");
    }

    #[test]
    fn formats_schedules() {
        let loc = Catalog::builtin(Locale::En);
        assert_eq!(schedule("0800-1600 DLY", &loc), "Daily 08:00 UTC to 16:00 UTC");
        assert_eq!(schedule("0800-1600", &loc), "08:00 UTC to 16:00 UTC");
        assert_eq!(schedule(" MON-FRI ", &loc), "MON-FRI");
    }

    #[test]
    fn gloss_per_locale() {
        assert_eq!(gloss(&Catalog::builtin(Locale::En), "RA", "rain"), "RA (rain)");
        assert_eq!(gloss(&Catalog::builtin(Locale::ZhCn), "RA", "雨"), "RA（雨）");
    }
}
