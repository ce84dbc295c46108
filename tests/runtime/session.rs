//! Sessions configured from files.

use wxgloss_foundation::{ErrorKind, FieldKey, Locale, MessageType, NotamItem};
use wxgloss_lexicon::{LexiconTable, Localizer};
use wxgloss_runtime::{RuntimeConfig, Session, load_messages};

use crate::fixture;

#[test]
fn config_loads_override_files() {
    let config = RuntimeConfig::new()
        .with_lexicon_path(fixture("lexicon_override.json"))
        .with_catalog_path(fixture("catalog_override_en.json"));
    let session = Session::from_config(&config).unwrap();

    assert_eq!(session.catalog().text("fields.wind"), "Surface wind");
    assert_eq!(
        session.lexicons().lookup(LexiconTable::Fir, "ZZZZ", Locale::En),
        Some("Test FIR")
    );
}

#[test]
fn catalog_overrides_reach_the_explanations() {
    let config = RuntimeConfig::new().with_catalog_path(fixture("catalog_override_en.json"));
    let session = Session::from_config(&config).unwrap();
    let reports = session.reports_from_file(&fixture("metar_egll.json")).unwrap();

    let pressure = reports[0]
        .analysis
        .fields
        .iter()
        .find(|f| f.key == FieldKey::Pressure)
        .unwrap();
    assert!(pressure.explanation.starts_with("Altimeter (QNH) "));
    let wind = reports[0]
        .analysis
        .fields
        .iter()
        .find(|f| f.key == FieldKey::Wind)
        .unwrap();
    assert_eq!(wind.label, "Surface wind");
}

#[test]
fn missing_override_file_fails() {
    let config = RuntimeConfig::new().with_lexicon_path(fixture("no_such_file.json"));
    let err = Session::from_config(&config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn catalog_file_is_not_a_lexicon() {
    let config = RuntimeConfig::new().with_lexicon_path(fixture("catalog_override_en.json"));
    let err = Session::from_config(&config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LexiconFormat(_)));
}

#[test]
fn array_files_yield_every_message() {
    let messages = load_messages(&fixture("batch.json")).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].message_type, MessageType::Unknown);
}

#[test]
fn locale_switch_changes_output() {
    let mut session = Session::new(Locale::En);
    let en = session.reports_from_file(&fixture("taf_egll.json")).unwrap();
    session.set_locale(Locale::ZhCn).unwrap();
    let zh = session.reports_from_file(&fixture("taf_egll.json")).unwrap();
    assert_ne!(en[0].analysis.fields[0].label, zh[0].analysis.fields[0].label);
    assert_eq!(
        en[0].analysis.fields.len(),
        zh[0].analysis.fields.len()
    );
}

#[test]
fn station_file_names_the_station() {
    let config = RuntimeConfig::new()
        .with_locale(Locale::ZhCn)
        .with_stations_path(fixture("stations.json"));
    let session = Session::from_config(&config).unwrap();

    let metar = session.reports_from_file(&fixture("metar_egll.json")).unwrap();
    let station = metar[0]
        .analysis
        .fields
        .iter()
        .find(|f| f.key == FieldKey::Station)
        .unwrap();
    assert_eq!(station.raw_value, "EGLL · 伦敦希思罗");

    let notam = session.reports_from_file(&fixture("notam_egll.json")).unwrap();
    let location = notam[0]
        .analysis
        .fields
        .iter()
        .find(|f| f.key == FieldKey::Notam(NotamItem::A))
        .unwrap();
    assert!(location.explanation.contains("EGLL · 伦敦希思罗"));
}

#[test]
fn message_file_is_not_a_station_file() {
    let config = RuntimeConfig::new().with_stations_path(fixture("lexicon_override.json"));
    let err = Session::from_config(&config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MessageFormat(_)));
}
