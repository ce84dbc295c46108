//! Property tests: the decoders are total.

use proptest::prelude::*;
use wxgloss_decode::remark::sea_level_pressure;
use wxgloss_decode::{WeatherCode, explain_remark, explain_weather, qline};
use wxgloss_foundation::Locale;
use wxgloss_lexicon::{Catalog, LexiconSet};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn q_lines_never_panic(line in "[A-Z0-9/ )Q]{0,60}") {
        let lexicons = LexiconSet::builtin();
        let en = Catalog::builtin(Locale::En);
        if let Some(parts) = qline::decode(&line, &lexicons, &en) {
            prop_assert_eq!(parts.len(), 8);
        }
    }

    #[test]
    fn weather_codes_never_panic(code in "[-+]?[A-Z]{0,10}") {
        let lexicons = LexiconSet::builtin();
        let zh = Catalog::builtin(Locale::ZhCn);
        let parsed = WeatherCode::parse(&code);
        prop_assert!(parsed.descriptors.len() <= 2);
        prop_assert_eq!(explain_weather(&code, &lexicons, &zh).is_empty(), code.is_empty());
    }

    #[test]
    fn remarks_are_never_blank(token in "[A-Z0-9]{1,10}") {
        let en = Catalog::builtin(Locale::En);
        prop_assert!(!explain_remark(&token, &en).is_empty());
    }

    #[test]
    fn sea_level_pressure_stays_in_range(value in 0u32..1000) {
        let text = sea_level_pressure(&format!("SLP{value:03}")).unwrap();
        let hpa: f64 = text.trim_end_matches(" hPa").parse().unwrap();
        prop_assert!((950.0..1050.0).contains(&hpa));
    }
}
