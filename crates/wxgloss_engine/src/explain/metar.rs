//! METAR and SPECI field order.

use wxgloss_decode::{explain_remark, explain_weather_list, format};
use wxgloss_foundation::FieldKey;
use wxgloss_lexicon::tr;

use super::{
    FieldList, push_clouds, push_raw_tokens, tendency_text, trend_gloss, visibility_text,
    wind_sentence,
};
use crate::view::{MessageView, VisibilityValue};

const REMARK_PREVIEW_CHARS: usize = 120;

pub(super) fn explain(view: &MessageView<'_>, out: &mut FieldList<'_>) {
    let loc = out.loc();
    let message = view.message();
    let parsed = &message.parsed;

    if let Some(code) = message.station_code() {
        let station = out.ctx.station_display(code);
        let explanation = tr!(loc, "explain.metar.station", station = station);
        out.push(FieldKey::Station, loc.text("fields.station"), station, explanation);
    }

    if let Some(time) = &parsed.issue_time {
        let text = format::utc_time(time);
        let explanation = tr!(loc, "explain.metar.issue_time", time = text);
        out.push(FieldKey::Issue, loc.text("fields.issue_time"), text, explanation);
    }

    if let Some(wind) = view.wind() {
        out.push(
            FieldKey::Wind,
            loc.text("fields.wind"),
            format::wind(wind),
            wind_sentence(loc, "metar", wind),
        );
    }

    if let Some(variation) = view.wind_variation() {
        let text = format!("{}° - {}°", variation.from_deg, variation.to_deg);
        let explanation = tr!(
            loc,
            "explain.metar.wind_variation",
            from = variation.from_deg,
            to = variation.to_deg,
        );
        out.push(FieldKey::WindVariation, loc.text("fields.wind_variation"), text, explanation);
    }

    if let Some(value) = view.visibility() {
        let text = visibility_text(value);
        let explanation = match value {
            VisibilityValue::Metres(_) => tr!(loc, "explain.metar.visibility", visibility = text),
            VisibilityValue::Raw(_) => tr!(loc, "explain.metar.visibility_raw", visibility = text),
        };
        out.push(FieldKey::Visibility, loc.text("fields.visibility"), text, explanation);
    }

    for (index, rvr) in view.rvr().iter().enumerate() {
        let tendency = tendency_text(loc, rvr.tendency);
        let text = format::rvr(rvr, tendency.as_deref());
        let explanation = tr!(loc, "explain.metar.rvr", runway = rvr.runway, rvr = text);
        let label = format!("{} {}", loc.text("fields.rvr"), rvr.runway);
        out.push(FieldKey::Rvr(Some(index)), label, text, explanation);
    }

    if !parsed.weather.is_empty() {
        let glossed = explain_weather_list(&parsed.weather, out.ctx.lexicons, loc);
        let explanation = tr!(loc, "explain.metar.weather", weather = glossed);
        out.push(
            FieldKey::Weather,
            loc.text("fields.weather"),
            parsed.weather.join(" "),
            explanation,
        );
    }

    push_clouds(out, "metar", view.clouds());

    if let Some(pair) = &parsed.temperature {
        let text = format::temperature(pair);
        let explanation = tr!(loc, "explain.metar.temperature", temp = text);
        out.push(FieldKey::Temperature, loc.text("fields.temperature"), text, explanation);
    }

    let pressure = message
        .normalized
        .pressure_hpa
        .map(format::pressure_hpa)
        .or_else(|| parsed.pressure_qnh.as_ref().map(format::pressure));
    if let Some(text) = pressure {
        let explanation = tr!(loc, "explain.metar.pressure", pressure = text);
        out.push(FieldKey::Pressure, loc.text("fields.pressure"), text, explanation);
    }

    let altimeter = message
        .normalized
        .pressure_inhg
        .map(format::pressure_inhg)
        .or_else(|| parsed.altimeter.as_ref().map(format::pressure));
    if let Some(text) = altimeter {
        let explanation = tr!(loc, "explain.metar.altimeter", altimeter = text);
        out.push(FieldKey::Altimeter, loc.text("fields.pressure_altimeter"), text, explanation);
    }

    if let Some(trend) = parsed.trend.as_deref() {
        let explanation = tr!(loc, "explain.metar.trend", trend = trend_gloss(loc, trend));
        out.push(FieldKey::Trend, loc.text("fields.trend"), trend.to_string(), explanation);
    }

    if let Some(remark) = parsed.rmk_raw.as_deref() {
        let preview = remark_preview(remark.trim());
        let explanation = tr!(loc, "explain.metar.remark", remark = preview);
        out.push(FieldKey::Remark, loc.text("fields.rmk"), preview, explanation);
    }

    for (index, token) in parsed.rmk_tokens.iter().enumerate() {
        out.push(
            FieldKey::RemarkItem(Some(index)),
            loc.text("fields.rmk_item"),
            token.clone(),
            explain_remark(token, loc),
        );
    }

    push_raw_tokens(out, &parsed.raw_tokens);
}

fn remark_preview(remark: &str) -> String {
    if remark.chars().count() <= REMARK_PREVIEW_CHARS {
        return remark.to_string();
    }
    let mut preview: String = remark.chars().take(REMARK_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_remarks_are_truncated() {
        let long = "A".repeat(130);
        let preview = remark_preview(&long);
        assert_eq!(preview.chars().count(), 123);
        assert!(preview.ends_with("..."));
        assert_eq!(remark_preview("AO2 SLP134"), "AO2 SLP134");
    }

    #[test]
    fn truncation_counts_characters() {
        let long = "雨".repeat(121);
        assert_eq!(remark_preview(&long).chars().count(), 123);
    }
}
