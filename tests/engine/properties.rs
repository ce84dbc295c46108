//! Property tests over generated messages.

use proptest::prelude::*;
use wxgloss_foundation::{CloudLayer, FieldKey, Locale, MessageType, Rvr, StructuredMessage};

use crate::analyze_in;

fn rvr_strategy() -> impl Strategy<Value = (String, u32)> {
    ("[0-3][0-9][LRC]?", 0u32..2000)
}

fn cloud_strategy() -> impl Strategy<Value = (&'static str, u32)> {
    (prop::sample::select(vec!["FEW", "SCT", "BKN", "OVC"]), 0u32..250)
}

fn metar(rvrs: &[(String, u32)], clouds: &[(&'static str, u32)]) -> StructuredMessage {
    let mut tokens = vec!["METAR".to_string(), "ZZZZ".to_string()];
    tokens.extend(rvrs.iter().map(|(runway, vis)| format!("R{runway}/{vis:04}")));
    tokens.extend(clouds.iter().map(|(amount, hundreds)| format!("{amount}{hundreds:03}")));

    let mut message = StructuredMessage {
        raw: tokens.join(" "),
        message_type: MessageType::Metar,
        ..StructuredMessage::default()
    };
    message.parsed.station = Some("ZZZZ".into());
    message.normalized.rvr = rvrs
        .iter()
        .map(|(runway, vis)| Rvr {
            runway: runway.clone(),
            vis_m: *vis,
            ..Rvr::default()
        })
        .collect();
    message.parsed.clouds = clouds
        .iter()
        .map(|(amount, hundreds)| CloudLayer {
            amount: (*amount).to_string(),
            height_ft: Some(hundreds * 100),
            cloud_type: None,
            raw: format!("{amount}{hundreds:03}"),
        })
        .collect();
    message
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_rvr_entry_is_explained(
        rvrs in prop::collection::vec(rvr_strategy(), 0..5),
        clouds in prop::collection::vec(cloud_strategy(), 0..5),
    ) {
        let analysis = analyze_in(&metar(&rvrs, &clouds), Locale::En);
        for index in 0..rvrs.len() {
            prop_assert!(analysis.fields.iter().any(|f| f.key == FieldKey::Rvr(Some(index))));
        }
        prop_assert_eq!(analysis.unjoined_indexed_tokens().count(), 0);
    }

    #[test]
    fn cloud_tokens_point_at_matching_layers(
        clouds in prop::collection::vec(cloud_strategy(), 1..6),
    ) {
        let message = metar(&[], &clouds);
        let analysis = analyze_in(&message, Locale::En);
        for token in analysis.tokens.iter().filter(|t| t.field_key == FieldKey::Clouds) {
            let layer = &message.parsed.clouds[token.cloud_layer.unwrap()];
            prop_assert_eq!(&layer.raw, &token.token);
        }
    }

    #[test]
    fn one_token_entry_per_raw_token(raw in "[A-Z0-9/ ]{0,60}") {
        for kind in [MessageType::Metar, MessageType::Taf, MessageType::Notam] {
            let message = StructuredMessage {
                raw: raw.clone(),
                message_type: kind,
                ..StructuredMessage::default()
            };
            let analysis = analyze_in(&message, Locale::ZhCn);
            prop_assert_eq!(analysis.tokens.len(), raw.split_whitespace().count());
        }
    }
}
