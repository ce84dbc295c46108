//! TAF field order.
//!
//! Top-level forecast first, then each change group in source order with its
//! own indexed keys.

use wxgloss_decode::{
    TemperatureExtreme, explain_cloud_layer, explain_weather, explain_weather_list, format,
};
use wxgloss_foundation::FieldKey;
use wxgloss_lexicon::{Localizer, tr};

use super::{FieldList, push_clouds, push_raw_tokens, trend_gloss, visibility_text, wind_sentence};
use crate::view::MessageView;

pub(super) fn explain(view: &MessageView<'_>, out: &mut FieldList<'_>) {
    let loc = out.loc();
    let message = view.message();
    let parsed = &message.parsed;

    if let Some(code) = message.station_code() {
        let station = out.ctx.station_display(code);
        let explanation = tr!(loc, "explain.taf.station", station = station);
        out.push(FieldKey::Station, loc.text("fields.station"), station, explanation);
    }

    if let Some(time) = &parsed.issue_time {
        let text = format::utc_time(time);
        let explanation = tr!(loc, "explain.taf.issue_time", time = text);
        out.push(FieldKey::Issue, loc.text("fields.issue_time"), text, explanation);
    }

    if let Some(period) = &parsed.validity {
        let text = format::validity(period);
        let explanation = tr!(loc, "explain.taf.validity", validity = text);
        out.push(FieldKey::Validity, loc.text("fields.validity"), text, explanation);
    }

    if let Some(wind) = view.wind() {
        out.push(
            FieldKey::Wind,
            loc.text("fields.wind"),
            format::wind(wind),
            wind_sentence(loc, "taf", wind),
        );
    }

    if let Some(value) = view.visibility() {
        let text = visibility_text(value);
        let explanation = tr!(loc, "explain.taf.visibility", visibility = text);
        out.push(FieldKey::Visibility, loc.text("fields.visibility"), text, explanation);
    }

    if !parsed.weather.is_empty() {
        let glossed = explain_weather_list(&parsed.weather, out.ctx.lexicons, loc);
        let explanation = tr!(loc, "explain.taf.weather", weather = glossed);
        out.push(
            FieldKey::Weather,
            loc.text("fields.weather"),
            parsed.weather.join(" "),
            explanation,
        );
    }

    push_clouds(out, "taf", view.clouds());

    for (index, group) in parsed.temperatures.iter().enumerate() {
        let explanation = match TemperatureExtreme::parse(group) {
            Some(extreme) => extreme.explain(loc),
            None => {
                tracing::debug!(group = %group, "malformed temperature extreme; shown raw");
                group.clone()
            }
        };
        out.push(
            FieldKey::TemperatureExtreme(index),
            loc.text("fields.temperature"),
            group.clone(),
            explanation,
        );
    }

    explain_trends(view, out);
    push_raw_tokens(out, &parsed.raw_tokens);
}

fn trend_label(loc: &dyn Localizer, index: usize, field: &str) -> String {
    format!("{} {} · {}", loc.text("fields.trend"), index + 1, loc.text(field))
}

fn explain_trends(view: &MessageView<'_>, out: &mut FieldList<'_>) {
    let loc = out.loc();
    let lexicons = out.ctx.lexicons;
    let count = view.trend_count();
    if count == 0 {
        return;
    }

    let kinds: Vec<&str> = (0..count).filter_map(|i| view.trend_kind(i)).collect();
    let glossed = kinds
        .iter()
        .map(|kind| trend_gloss(loc, kind))
        .collect::<Vec<_>>()
        .join(", ");
    out.push(
        FieldKey::Trends,
        loc.text("fields.trend"),
        kinds.join(" "),
        tr!(loc, "explain.taf.trends", trends = glossed),
    );

    for index in 0..count {
        let kind = view
            .trend_kind(index)
            .map_or_else(|| format!("#{}", index + 1), |kind| trend_gloss(loc, kind));

        if let Some(period) = view.trend_period(index) {
            let text = format::validity(period);
            let explanation = tr!(loc, "explain.taf.trend_period", kind = kind, period = text);
            out.push(
                FieldKey::TrendPeriod(index),
                trend_label(loc, index, "fields.validity"),
                text,
                explanation,
            );
        }

        if let Some(wind) = view.trend_wind(index) {
            let text = format::wind(wind);
            let explanation = tr!(loc, "explain.taf.trend_wind", kind = kind, wind = text);
            out.push(
                FieldKey::TrendWind(index),
                trend_label(loc, index, "fields.wind"),
                text,
                explanation,
            );
        }

        if let Some(value) = view.trend_visibility(index) {
            let text = visibility_text(value);
            let explanation =
                tr!(loc, "explain.taf.trend_visibility", kind = kind, visibility = text);
            out.push(
                FieldKey::TrendVisibility(index),
                trend_label(loc, index, "fields.visibility"),
                text,
                explanation,
            );
        }

        for (slot, code) in view.trend_weather(index).iter().enumerate() {
            let weather = explain_weather(code, lexicons, loc);
            let explanation = tr!(loc, "explain.taf.trend_weather", kind = kind, weather = weather);
            out.push(
                FieldKey::TrendWeather(index, Some(slot)),
                trend_label(loc, index, "fields.weather"),
                code.clone(),
                explanation,
            );
        }

        for (slot, layer) in view.trend_clouds(index).iter().enumerate() {
            let clouds = explain_cloud_layer(layer, lexicons, loc);
            let explanation = tr!(loc, "explain.taf.trend_clouds", kind = kind, clouds = clouds);
            out.push(
                FieldKey::TrendCloud(index, Some(slot)),
                trend_label(loc, index, "fields.clouds"),
                format::cloud_layer(layer),
                explanation,
            );
        }
    }
}
