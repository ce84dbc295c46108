//! Locale independence of the structure.

use wxgloss_foundation::Locale;

use crate::{METAR, NOTAM, TAF, analyze_in, field_keys, message, token_keys};

#[test]
fn structure_does_not_depend_on_locale() {
    for json in [METAR, TAF, NOTAM] {
        let message = message(json);
        let en = analyze_in(&message, Locale::En);
        let zh = analyze_in(&message, Locale::ZhCn);
        assert_eq!(token_keys(&en), token_keys(&zh));
        assert_eq!(field_keys(&en), field_keys(&zh));
    }
}

#[test]
fn text_does_depend_on_locale() {
    let message = message(METAR);
    let en = analyze_in(&message, Locale::En);
    let zh = analyze_in(&message, Locale::ZhCn);
    assert_eq!(en.fields[0].label, "Station");
    assert_eq!(zh.fields[0].label, "站点");
    assert_ne!(en.fields[0].explanation, zh.fields[0].explanation);
    assert_eq!(zh.tokens[15].detail, "海平面气压 1013.4 hPa");
}

#[test]
fn chinese_weather_gloss() {
    let zh = analyze_in(&message(METAR), Locale::ZhCn);
    let weather = zh.fields.iter().find(|f| f.raw_value == "-TSRA").unwrap();
    assert!(weather.explanation.contains("-TSRA（"));
}
