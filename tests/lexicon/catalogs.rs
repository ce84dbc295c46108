//! Built-in catalogs.

use wxgloss_foundation::{FieldKey, Locale, NotamItem};
use wxgloss_lexicon::{Catalog, Localizer, tr};

fn sample_keys() -> Vec<FieldKey> {
    let mut keys = vec![
        FieldKey::ReportType,
        FieldKey::Station,
        FieldKey::Issue,
        FieldKey::Validity,
        FieldKey::Wind,
        FieldKey::WindVariation,
        FieldKey::Visibility,
        FieldKey::Rvr(Some(0)),
        FieldKey::Weather,
        FieldKey::Clouds,
        FieldKey::Temperature,
        FieldKey::TemperatureExtreme(1),
        FieldKey::Pressure,
        FieldKey::Altimeter,
        FieldKey::Trend,
        FieldKey::Trends,
        FieldKey::TrendPeriod(0),
        FieldKey::TrendWind(0),
        FieldKey::TrendVisibility(0),
        FieldKey::TrendWeather(0, Some(0)),
        FieldKey::TrendCloud(0, None),
        FieldKey::Remark,
        FieldKey::RemarkItem(Some(2)),
        FieldKey::RawTokens,
        FieldKey::QLineFull,
        FieldKey::QLinePart(3),
    ];
    keys.extend(NotamItem::ALL.into_iter().map(FieldKey::Notam));
    keys
}

#[test]
fn both_locales_have_the_same_keys() {
    let en = Catalog::builtin(Locale::En);
    let zh = Catalog::builtin(Locale::ZhCn);
    assert_eq!(en.len(), zh.len());
    assert!(!en.is_empty());
}

#[test]
fn every_classifier_label_resolves() {
    for locale in Locale::ALL {
        let catalog = Catalog::builtin(locale);
        for key in sample_keys() {
            assert!(
                catalog.has(key.label_key()),
                "{locale}: missing label for {key}"
            );
        }
    }
}

#[test]
fn every_notam_item_label_resolves() {
    for locale in Locale::ALL {
        let catalog = Catalog::builtin(locale);
        for item in NotamItem::ALL {
            let key = format!("fields.notam_{}", item.letter());
            assert!(catalog.has(&key), "{locale}: missing {key}");
        }
    }
}

#[test]
fn locales_render_differently() {
    let en = Catalog::builtin(Locale::En);
    let zh = Catalog::builtin(Locale::ZhCn);
    assert_eq!(tr!(&en, "fields.wind"), "Wind");
    assert_eq!(tr!(&zh, "fields.wind"), "风");
    assert_eq!(
        tr!(&en, "explain.metar.station", station = "EGLL"),
        "Report from EGLL."
    );
}

#[test]
fn misses_fall_back_to_the_key() {
    let en = Catalog::builtin(Locale::En);
    assert_eq!(en.text("no.such.key"), "no.such.key");
    assert_eq!(tr!(&en, "no.such.key", value = 1), "no.such.key");
}
