//! Rendering fixture reports.

use wxgloss_runtime::{
    HumanRenderer, JsonRenderer, OutputFormat, Renderer, RuntimeConfig, Session, renderer_for,
};

use crate::fixture;

#[test]
fn human_output_for_a_notam() {
    let reports = Session::default()
        .reports_from_file(&fixture("notam_egll.json"))
        .unwrap();
    let text = HumanRenderer::new().fields_only().render_many(&reports).unwrap();
    assert!(text.starts_with("[notam] A1234/24 NOTAMN"));
    assert!(text.contains("  Q) Q-line: Q) EGTT/QMRLC/IV/NBO/A/000/999/5129N00028W005"));
    assert!(!text.contains("tokens:"));
}

#[test]
fn json_output_for_a_batch() {
    let reports = Session::default()
        .reports_from_file(&fixture("batch.json"))
        .unwrap();
    let text = JsonRenderer::new().render_many(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["messageType"], "metar");
    assert_eq!(value[1]["messageType"], "unknown");
    assert_eq!(value[1]["fields"], serde_json::json!([]));
}

#[test]
fn renderer_honours_sections() {
    let reports = Session::default()
        .reports_from_file(&fixture("metar_egll.json"))
        .unwrap();
    let config = RuntimeConfig::new().with_format(OutputFormat::Json).tokens_only();
    let text = renderer_for(&config).render_many(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value.get("fields").is_none());
    assert_eq!(value["tokens"][0]["token"], "METAR");
}
