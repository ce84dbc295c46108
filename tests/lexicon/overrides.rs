//! Lexicon and catalog override documents.

use wxgloss_foundation::{ErrorKind, Locale};
use wxgloss_lexicon::{Catalog, LexiconSet, LexiconTable, Localizer};

const LEXICON: &str = include_str!("../fixtures/lexicon_override.json");
const CATALOG: &str = include_str!("../fixtures/catalog_override_en.json");

#[test]
fn lexicon_override_layers_per_locale() {
    let extra = LexiconSet::from_json_str(LEXICON, "lexicon_override.json").unwrap();
    let merged = LexiconSet::builtin().merged_with(&extra);

    assert_eq!(
        merged.lookup(LexiconTable::Fir, "ZZZZ", Locale::ZhCn),
        Some("测试情报区")
    );
    assert_eq!(
        merged.lookup(LexiconTable::WeatherPhenomenon, "RA", Locale::En),
        Some("liquid rain")
    );
    assert_eq!(
        merged.lookup(LexiconTable::WeatherPhenomenon, "RA", Locale::ZhCn),
        Some("雨")
    );
    assert_eq!(
        merged.lookup(LexiconTable::Fir, "EGTT", Locale::En),
        Some("London")
    );
}

#[test]
fn unknown_table_is_rejected_with_source() {
    let err = LexiconSet::from_json_str(r#"{"metar": {}}"#, "bad.json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LexiconFormat(_)));
    assert!(err.to_string().contains("metar"));
}

#[test]
fn malformed_lexicon_keeps_position() {
    let err = LexiconSet::from_json_str("{\n  \"fir\": [", "bad.json").unwrap_err();
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("bad.json"));
    assert_eq!(context.line, Some(2));
}

#[test]
fn unsupported_locale_texts_are_skipped() {
    let set = LexiconSet::from_json_str(
        r#"{"fir": {"ZZZZ": {"fr": "Essai", "en": "Test"}}}"#,
        "inline",
    )
    .unwrap();
    assert_eq!(set.lookup(LexiconTable::Fir, "ZZZZ", Locale::En), Some("Test"));
    assert_eq!(set.table(LexiconTable::Fir).len(), 1);
}

#[test]
fn catalog_override_accepts_nested_and_flat_keys() {
    let catalog = Catalog::builtin(Locale::En)
        .with_overrides_json(CATALOG, "catalog_override_en.json")
        .unwrap();
    assert_eq!(catalog.text("fields.wind"), "Surface wind");
    assert_eq!(
        catalog.format("explain.metar.pressure", &[("pressure", "1015 hPa".to_string())]),
        "Altimeter (QNH) 1015 hPa."
    );
    assert_eq!(catalog.text("fields.station"), "Station");
}

#[test]
fn catalog_override_rejects_arrays() {
    let err = Catalog::builtin(Locale::En)
        .with_overrides_json(r#"{"fields": ["Wind"]}"#, "bad.json")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CatalogFormat(_)));
}
