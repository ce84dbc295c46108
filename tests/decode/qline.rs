//! Q-line decoding through the public API.

use wxgloss_decode::qline;
use wxgloss_foundation::{Locale, QPartKind};
use wxgloss_lexicon::{Catalog, LexiconSet};

const LINE: &str = "Q) EGTT/QMRLC/IV/NBO/A/000/999/5129N00028W005";

#[test]
fn eight_parts_in_order() {
    let lexicons = LexiconSet::builtin();
    let en = Catalog::builtin(Locale::En);
    let parts = qline::decode(LINE, &lexicons, &en).unwrap();

    let kinds: Vec<QPartKind> = parts.iter().map(|p| p.key).collect();
    assert_eq!(kinds, QPartKind::ALL);
    assert_eq!(parts[1].raw, "QMRLC");
    assert_eq!(parts[6].explanation, "999");
}

#[test]
fn short_and_long_lines_are_opaque() {
    let lexicons = LexiconSet::builtin();
    let en = Catalog::builtin(Locale::En);
    assert!(qline::decode("EGTT/QMRLC/IV/NBO/A/000/999", &lexicons, &en).is_none());
    let nine_parts = "EGTT/QMRLC/IV/NBO/A/000/999/5129N00028W005/X";
    assert!(qline::decode(nine_parts, &lexicons, &en).is_none());
    assert!(qline::decode("", &lexicons, &en).is_none());
}

#[test]
fn unknown_slot_is_not_a_bare_code() {
    let lexicons = LexiconSet::builtin();
    let en = Catalog::builtin(Locale::En);
    let text = qline::explain_q_code("QZZLC", &lexicons, &en);
    assert!(text.contains("unspecified subject (code ZZ)"));
    assert!(text.contains("closed"));
}

#[test]
fn reserved_slot_differs_from_unknown() {
    let lexicons = LexiconSet::builtin();
    let en = Catalog::builtin(Locale::En);
    let reserved = qline::explain_q_code("QXXLC", &lexicons, &en);
    let unknown = qline::explain_q_code("QZZLC", &lexicons, &en);
    assert!(reserved.contains("XX reserved"));
    assert_ne!(reserved, unknown);
}

#[test]
fn chinese_q_code_uses_chinese_lexicon() {
    let lexicons = LexiconSet::builtin();
    let en = Catalog::builtin(Locale::En);
    let zh = Catalog::builtin(Locale::ZhCn);
    let en_text = qline::explain_q_code("QMRLC", &lexicons, &en);
    let zh_text = qline::explain_q_code("QMRLC", &lexicons, &zh);
    assert_ne!(en_text, zh_text);
    assert!(zh_text.contains("QMRLC"));
}

#[test]
fn bad_centre_degrades_to_raw() {
    let en = Catalog::builtin(Locale::En);
    assert!(qline::explain_center("5129N00028W", &en).contains("5129N00028W"));
}
