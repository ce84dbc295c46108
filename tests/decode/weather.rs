//! Weather phenomena.

use wxgloss_decode::{WeatherCode, explain_weather};
use wxgloss_foundation::Locale;
use wxgloss_lexicon::{Catalog, LexiconSet};

#[test]
fn light_thunderstorm_rain_has_three_segments() {
    let lexicons = LexiconSet::builtin();
    let code = WeatherCode::parse("-TSRA");
    assert_eq!(
        code.meanings(&lexicons, Locale::En),
        ["light", "thunderstorm", "rain"]
    );
}

#[test]
fn heavy_showers_of_snow() {
    let code = WeatherCode::parse("+SHSN");
    assert_eq!(code.intensity, Some('+'));
    assert_eq!(code.descriptors, ["SH"]);
    assert_eq!(code.phenomena, ["SN"]);
}

#[test]
fn lowercase_codes_are_normalized() {
    let lexicons = LexiconSet::builtin();
    let en = Catalog::builtin(Locale::En);
    assert_eq!(explain_weather("-tsra", &lexicons, &en), "-TSRA (light thunderstorm rain)");
}

#[test]
fn partial_resolution_keeps_known_segments() {
    let lexicons = LexiconSet::builtin();
    let code = WeatherCode::parse("-QQRA");
    assert_eq!(code.phenomena, ["QQ", "RA"]);
    assert_eq!(code.meanings(&lexicons, Locale::En), ["light", "rain"]);
}
