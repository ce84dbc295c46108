//! End-to-end analysis of the fixture messages.

use wxgloss_foundation::{FieldKey, FieldMeta, Locale, MessageType, StructuredMessage};

use crate::{BATCH, METAR, NOTAM, TAF, analyze_in, field_keys, message, token_keys};

#[test]
fn metar_tokens() {
    let analysis = analyze_in(&message(METAR), Locale::En);
    assert_eq!(analysis.message_type, MessageType::Metar);
    assert_eq!(
        token_keys(&analysis),
        [
            "report_type", "station", "issue", "wind", "wind_variation", "rvr_0",
            "visibility", "weather", "clouds", "clouds", "temp", "pressure", "trend",
            "rmk", "rmk_item_0", "rmk_item_1", "rmk_item_2", "rmk_item_3",
        ]
    );
    assert_eq!(analysis.tokens[8].cloud_layer, Some(0));
    assert_eq!(analysis.tokens[9].cloud_layer, Some(1));
    assert_eq!(analysis.tokens[16].detail, "Temperature 12.2°C, dewpoint 8.1°C");
    assert_eq!(analysis.tokens[17].detail, "ZZZ");
}

#[test]
fn metar_fields() {
    let analysis = analyze_in(&message(METAR), Locale::En);
    assert_eq!(
        field_keys(&analysis),
        [
            "station", "issue", "wind", "wind_variation", "visibility", "rvr_0", "weather",
            "clouds", "temp", "pressure", "trend", "rmk", "rmk_item_0", "rmk_item_1",
            "rmk_item_2", "rmk_item_3",
        ]
    );

    let rvr = &analysis.fields[5];
    assert_eq!(rvr.label, "RVR 27L");
    assert_eq!(rvr.raw_value, "550-800 m (increasing)");

    let weather = &analysis.fields[6];
    assert_eq!(weather.raw_value, "-TSRA");
    assert!(weather.explanation.contains("-TSRA (light thunderstorm rain)"));

    let Some(FieldMeta::Clouds(layers)) = &analysis.fields[7].meta else {
        panic!("cloud field without layer detail");
    };
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[1].index, 1);
}

#[test]
fn taf_tokens_follow_change_groups() {
    let analysis = analyze_in(&message(TAF), Locale::En);
    assert_eq!(
        token_keys(&analysis),
        [
            "report_type", "station", "issue", "validity", "wind", "visibility", "clouds",
            "temp_0", "temp_1", "trends", "trend_period_0", "trend_wind_0", "trends",
            "trend_period_1", "trend_visibility_1", "trend_weather_1_0", "trend_cloud_1_0",
        ]
    );
}

#[test]
fn taf_fields_group_each_trend() {
    let analysis = analyze_in(&message(TAF), Locale::En);
    assert_eq!(
        field_keys(&analysis),
        [
            "station", "issue", "validity", "wind", "visibility", "clouds", "temp_0", "temp_1",
            "trends", "trend_period_0", "trend_wind_0", "trend_period_1", "trend_visibility_1",
            "trend_weather_1_0", "trend_cloud_1_0",
        ]
    );

    let trends = &analysis.fields[8];
    assert_eq!(trends.raw_value, "BECMG TEMPO");
    assert_eq!(analysis.fields[10].label, "Trend 1 · Wind");
    assert!(analysis.fields[7].explanation.contains("-2°C"));
}

#[test]
fn notam_sections() {
    let analysis = analyze_in(&message(NOTAM), Locale::En);
    assert_eq!(analysis.message_type, MessageType::Notam);

    let tokens = token_keys(&analysis);
    assert_eq!(&tokens[..4], ["raw", "report_type", "q_line_full", "q_line_full"]);
    assert_eq!(&tokens[4..6], ["a", "a"]);
    assert!(tokens[14..].iter().all(|key| key == "e"));

    assert_eq!(
        field_keys(&analysis),
        [
            "q_line_full", "q_line_0", "q_line_1", "q_line_2", "q_line_3", "q_line_4",
            "q_line_5", "q_line_6", "q_line_7", "a", "b", "c", "d", "e",
        ]
    );
    let c = analysis
        .fields
        .iter()
        .find(|f| f.key == FieldKey::Notam(wxgloss_foundation::NotamItem::C))
        .unwrap();
    assert_eq!(c.raw_value, "2024-01-15 16:00 UTC (estimated)");
}

#[test]
fn every_indexed_token_joins_a_field() {
    for json in [METAR, TAF, NOTAM] {
        let analysis = analyze_in(&message(json), Locale::En);
        let unjoined: Vec<_> = analysis.unjoined_indexed_tokens().collect();
        assert!(unjoined.is_empty(), "unjoined: {unjoined:?}");
    }
}

#[test]
fn batch_documents() {
    let messages = StructuredMessage::many_from_json_str(BATCH).unwrap();
    assert_eq!(messages.len(), 2);

    let metar = analyze_in(&messages[0], Locale::En);
    let wind = metar.fields.iter().find(|f| f.key == FieldKey::Wind).unwrap();
    assert!(wind.explanation.starts_with("Wind variable in direction"));
    let visibility = metar
        .fields
        .iter()
        .find(|f| f.key == FieldKey::Visibility)
        .unwrap();
    assert_eq!(visibility.raw_value, "CAVOK");

    let unknown = analyze_in(&messages[1], Locale::En);
    assert_eq!(unknown.message_type, MessageType::Unknown);
    assert!(unknown.fields.is_empty());
    assert_eq!(token_keys(&unknown), ["raw", "raw"]);
}

#[test]
fn final_type_overrides_detected_type() {
    let mut notam = message(NOTAM);
    notam.message_type = MessageType::Unknown;
    notam.final_type = Some(MessageType::Notam);
    assert_eq!(analyze_in(&notam, Locale::En).message_type, MessageType::Notam);
}

#[test]
fn unknown_type_keeps_every_token() {
    let mut unknown = message(METAR);
    unknown.message_type = MessageType::Unknown;
    unknown.final_type = None;

    let analysis = analyze_in(&unknown, Locale::En);
    assert_eq!(analysis.message_type, MessageType::Unknown);
    assert!(analysis.fields.is_empty());
    assert_eq!(analysis.tokens.len(), unknown.tokens().count());
    for (token, raw) in analysis.tokens.iter().zip(unknown.tokens()) {
        assert_eq!(token.token, raw);
        assert!(analysis.field_for(token).is_none());
    }
}

#[test]
fn reserved_q_code_slot_reaches_the_summary() {
    let mut notam = message(NOTAM);
    notam.parsed.q_line = Some("EGTT/QMRXX/IV/NBO/A/000/999/5129N00028W005".into());

    let analysis = analyze_in(&notam, Locale::En);
    let full = &analysis.fields[0];
    assert_eq!(full.key, FieldKey::QLineFull);
    assert!(full.explanation.contains("subject MR runway"));
    assert!(full.explanation.contains("condition not specified (XX reserved)"));

    let code = &analysis.fields[2];
    assert_eq!(code.key, FieldKey::QLinePart(1));
    assert_eq!(code.raw_value, "QMRXX");
    assert!(!code.explanation.contains("unspecified"));
}
