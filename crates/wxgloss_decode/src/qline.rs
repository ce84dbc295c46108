//! NOTAM Q-line decoding.
//!
//! `FIR/QCODE/TRAFFIC/PURPOSE/SCOPE/LOWER/UPPER/CENTRE` is split into
//! exactly eight parts, each explained on its own. A line that does not
//! split into eight parts is not decoded at all; callers show it as received.

use std::sync::LazyLock;

use regex::Regex;
use wxgloss_foundation::{QLinePart, QPartKind};
use wxgloss_lexicon::{LexiconSet, LexiconTable, Localizer, tr};

static CENTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})(\d{2})([NS])(\d{3})(\d{2})([EW])(\d{3})$").expect("centre regex")
});

const RESERVED: &str = "XX";

/// Splits a Q-line into its eight raw parts.
///
/// A leading `Q)` tag is ignored. Returns `None` unless there are exactly
/// eight slash-delimited parts.
#[must_use]
pub fn split(q_line: &str) -> Option<[&str; 8]> {
    let line = q_line.trim();
    let line = line
        .strip_prefix("Q)")
        .or_else(|| line.strip_prefix("q)"))
        .unwrap_or(line)
        .trim();
    let parts: Vec<&str> = line.split('/').map(str::trim).collect();
    parts.try_into().ok()
}

/// Decodes a Q-line into its eight explained parts.
#[must_use]
pub fn decode(q_line: &str, lexicons: &LexiconSet, loc: &dyn Localizer) -> Option<Vec<QLinePart>> {
    let Some(raw_parts) = split(q_line) else {
        tracing::debug!(q_line, "Q-line is not eight parts; treating as opaque");
        return None;
    };
    let parts = QPartKind::ALL
        .into_iter()
        .zip(raw_parts)
        .map(|(key, raw)| QLinePart {
            key,
            raw: raw.to_string(),
            explanation: explain_part(key, raw, lexicons, loc),
        })
        .collect();
    Some(parts)
}

/// Explains one part.
#[must_use]
pub fn explain_part(
    kind: QPartKind,
    raw: &str,
    lexicons: &LexiconSet,
    loc: &dyn Localizer,
) -> String {
    match kind {
        QPartKind::Fir => explain_fir(raw, lexicons, loc),
        QPartKind::QCode => explain_q_code(raw, lexicons, loc),
        QPartKind::Traffic => explain_flags(raw, "traffic", loc),
        QPartKind::Purpose => explain_flags(raw, "purpose", loc),
        QPartKind::Scope => explain_flags(raw, "scope", loc),
        QPartKind::Lower | QPartKind::Upper => raw.to_string(),
        QPartKind::Center => explain_center(raw, loc),
    }
}

/// `EGTT London`, or the bare code when the FIR is not in the lexicon.
#[must_use]
pub fn explain_fir(code: &str, lexicons: &LexiconSet, loc: &dyn Localizer) -> String {
    match lexicons.lookup(LexiconTable::Fir, code, loc.locale()) {
        Some(name) => format!("{code} {name}"),
        None => code.to_string(),
    }
}

/// Explains `Q` + two-letter subject + two-letter condition.
#[must_use]
pub fn explain_q_code(code: &str, lexicons: &LexiconSet, loc: &dyn Localizer) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 5 {
        let meaning = tr!(loc, "notam.q.q_code_unknown", code = code);
        return tr!(loc, "notam.q.q_code_simple", code = code, meaning = meaning);
    }
    let subject_code: String = chars[1..3].iter().collect::<String>().to_uppercase();
    let condition_code: String = chars[3..5].iter().collect::<String>().to_uppercase();

    let subject = slot_meaning(&subject_code, LexiconTable::NotamSubject, "subject", lexicons, loc);
    let condition = slot_meaning(
        &condition_code,
        LexiconTable::NotamCondition,
        "condition",
        lexicons,
        loc,
    );

    tr!(
        loc,
        "notam.q.q_code",
        code = code,
        subject_code = subject_code,
        subject = subject,
        condition_code = condition_code,
        condition = condition,
    )
}

fn slot_meaning(
    code: &str,
    table: LexiconTable,
    slot: &str,
    lexicons: &LexiconSet,
    loc: &dyn Localizer,
) -> String {
    if code == RESERVED {
        return tr!(loc, &format!("notam.q.{slot}_reserved"), code = code);
    }
    match lexicons.lookup(table, code, loc.locale()) {
        Some(meaning) => meaning.to_string(),
        None => {
            tracing::debug!(%table, code, "unknown Q-code {slot}");
            tr!(loc, &format!("notam.q.{slot}_unknown"), code = code)
        }
    }
}

/// Explains a string of single-letter flags (`IV`, `NBO`, `AE`).
///
/// Each letter is looked up as `notam.q.<family>_<letter>`; letters without
/// a template render as themselves. A letter with a
/// `notam.q.<family>_<letter>_desc` template gets it appended.
#[must_use]
pub fn explain_flags(flags: &str, family: &str, loc: &dyn Localizer) -> String {
    let entries: Vec<String> = flags
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|letter| {
            let key = format!("notam.q.{family}_{letter}");
            let label = loc.template(&key).map_or_else(|| letter.to_string(), str::to_string);
            match loc.template(&format!("{key}_desc")) {
                Some(desc) => format!("{label} ({desc})"),
                None => label,
            }
        })
        .collect();
    tr!(loc, &format!("notam.q.{family}"), meaning = entries.join(", "))
}

/// `5129N00028W005` becomes `51°29'N 000°28'W, radius 5 NM`.
#[must_use]
pub fn explain_center(raw: &str, loc: &dyn Localizer) -> String {
    let Some(caps) = CENTER_RE.captures(raw) else {
        tracing::debug!(raw, "unparsable Q-line centre/radius");
        return tr!(loc, "notam.q.center", value = raw);
    };
    let lat = format!("{}°{}'{}", &caps[1], &caps[2], &caps[3]);
    let lon = format!("{}°{}'{}", &caps[4], &caps[5], &caps[6]);
    let radius = caps[7].parse::<u32>().map_or_else(|_| caps[7].to_string(), |nm| nm.to_string());
    tr!(loc, "notam.q.center_parsed", lat = lat, lon = lon, radius = format!("{radius} NM"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxgloss_foundation::Locale;
    use wxgloss_lexicon::Catalog;

    const LINE: &str = "EGTT/QMRLC/IV/NBO/A/000/999/5129N00028W005";

    #[test]
    fn splits_exactly_eight() {
        let parts = split(LINE).unwrap();
        assert_eq!(parts[0], "EGTT");
        assert_eq!(parts[7], "5129N00028W005");
        assert!(split("Q) EGTT/QMRLC/IV/NBO/A/000/999/5129N00028W005").is_some());
        assert!(split("EGTT/QMRLC/IV").is_none());
        assert!(split("A/B/C/D/E/F/G/H/I").is_none());
    }

    #[test]
    fn decodes_well_formed_line() {
        let lexicons = LexiconSet::builtin();
        let en = Catalog::builtin(Locale::En);
        let parts = decode(LINE, &lexicons, &en).unwrap();
        assert_eq!(parts.len(), 8);
        assert_eq!(parts[0].explanation, "EGTT London");
        assert_eq!(
            parts[1].explanation,
            "QMRLC: subject MR runway; condition LC closed"
        );
        assert_eq!(
            parts[2].explanation,
            "Traffic: IFR (instrument flight rules), VFR (visual flight rules)"
        );
        assert_eq!(parts[5].explanation, "000");
        assert_eq!(parts[7].explanation, "Centre 51°29'N 000°28'W, radius 5 NM");
        assert_eq!(parts[7].key, QPartKind::Center);
    }

    #[test]
    fn unknown_and_reserved_slots_differ() {
        let lexicons = LexiconSet::builtin();
        let en = Catalog::builtin(Locale::En);
        let unknown = explain_q_code("QZZZQ", &lexicons, &en);
        assert!(unknown.contains("unspecified subject (code ZZ)"));
        assert!(unknown.contains("unspecified condition (code ZQ)"));

        let reserved = explain_q_code("QXXXX", &lexicons, &en);
        assert!(reserved.contains("subject not specified (XX reserved)"));
        assert!(reserved.contains("condition not specified (XX reserved)"));
    }

    #[test]
    fn short_q_code() {
        let lexicons = LexiconSet::builtin();
        let en = Catalog::builtin(Locale::En);
        assert_eq!(
            explain_q_code("QM", &lexicons, &en),
            "QM: unrecognised Q-code QM"
        );
    }

    #[test]
    fn unknown_flags_render_as_letters() {
        let en = Catalog::builtin(Locale::En);
        assert_eq!(explain_flags("AZ", "scope", &en), "Scope: aerodrome, Z");
    }

    #[test]
    fn bad_centre_uses_generic_template() {
        let en = Catalog::builtin(Locale::En);
        assert_eq!(explain_center("51N000W", &en), "Centre / radius: 51N000W");
    }

    #[test]
    fn unknown_fir_passes_through() {
        let lexicons = LexiconSet::builtin();
        let en = Catalog::builtin(Locale::En);
        assert_eq!(explain_fir("XXXX", &lexicons, &en), "XXXX");
    }
}
