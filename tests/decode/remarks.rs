//! Remark groups.

use wxgloss_decode::remark::{hourly_precipitation, sea_level_pressure, temperature_dewpoint};
use wxgloss_decode::{RemarkGroup, explain_remark};
use wxgloss_foundation::Locale;
use wxgloss_lexicon::Catalog;

#[test]
fn sea_level_pressure_branches_at_500() {
    assert_eq!(sea_level_pressure("SLP998").as_deref(), Some("999.8 hPa"));
    assert_eq!(sea_level_pressure("SLP134").as_deref(), Some("1013.4 hPa"));
    assert_eq!(sea_level_pressure("SLP500").as_deref(), Some("950.0 hPa"));
    assert_eq!(sea_level_pressure("SLP499").as_deref(), Some("1049.9 hPa"));
    assert_eq!(sea_level_pressure("SLPNO"), None);
}

#[test]
fn temperature_group_with_negative_dewpoint() {
    let (temp, dew) = temperature_dewpoint("T00121018").unwrap();
    assert_eq!(temp.as_deref(), Some("1.2°C"));
    assert_eq!(dew.as_deref(), Some("-1.8°C"));
}

#[test]
fn temperature_group_without_dewpoint() {
    let (temp, dew) = temperature_dewpoint("T1005").unwrap();
    assert_eq!(temp.as_deref(), Some("-0.5°C"));
    assert_eq!(dew, None);
}

#[test]
fn temperature_group_with_missing_temperature() {
    let (temp, dew) = temperature_dewpoint("T////1018").unwrap();
    assert_eq!(temp, None);
    assert_eq!(dew.as_deref(), Some("-1.8°C"));

    let zh = Catalog::builtin(Locale::ZhCn);
    assert_eq!(explain_remark("T////1018", &zh), "露点 -1.8°C");
}

#[test]
fn precipitation_in_inches() {
    assert_eq!(hourly_precipitation("P0125").as_deref(), Some("1.25"));
    assert_eq!(hourly_precipitation("P0003").as_deref(), Some("0.03"));
}

#[test]
fn groups_explain_in_both_locales() {
    let en = Catalog::builtin(Locale::En);
    let zh = Catalog::builtin(Locale::ZhCn);
    assert_eq!(explain_remark("SLP134", &en), "Sea-level pressure 1013.4 hPa");
    assert_eq!(explain_remark("SLP134", &zh), "海平面气压 1013.4 hPa");
    assert_eq!(
        explain_remark("T00121018", &en),
        "Temperature 1.2°C, dewpoint -1.8°C"
    );
    assert_eq!(explain_remark("P0125", &en), "Precipitation in the last hour 1.25 in");
}

#[test]
fn unknown_remarks_echo() {
    let en = Catalog::builtin(Locale::En);
    assert_eq!(RemarkGroup::parse("VIRGA"), None);
    assert_eq!(explain_remark("VIRGA", &en), "VIRGA");
}
