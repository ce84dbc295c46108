//! Field explainer.
//!
//! Walks the structured data of one message in a fixed per-type order and
//! emits an [`ExplainedField`] for every value that is present. Absent values
//! are omitted, never emitted empty; malformed sub-structures degrade to their
//! raw text.

mod metar;
mod notam;
mod taf;

use wxgloss_decode::{explain_cloud_layer, format};
use wxgloss_foundation::{
    CloudLayer, ExplainedField, FieldKey, FieldMeta, LayerDetail, MessageType, RvrTendency,
    StructuredMessage, Wind,
};
use wxgloss_lexicon::{Localizer, tr};

use crate::context::ExplainContext;
use crate::view::{MessageView, VisibilityValue};

/// Explains a message as its effective type.
#[must_use]
pub fn explain(message: &StructuredMessage, ctx: &ExplainContext<'_>) -> Vec<ExplainedField> {
    explain_as(message, message.effective_type(), ctx)
}

/// Explains a message as `kind`, whatever type it was decoded as.
#[must_use]
pub fn explain_as(
    message: &StructuredMessage,
    kind: MessageType,
    ctx: &ExplainContext<'_>,
) -> Vec<ExplainedField> {
    let view = MessageView::new(message);
    let mut out = FieldList::new(*ctx);
    match kind {
        MessageType::Metar => metar::explain(&view, &mut out),
        MessageType::Taf => taf::explain(&view, &mut out),
        MessageType::Notam => notam::explain(&view, &mut out),
        MessageType::Unknown => {
            tracing::debug!("unrecognised message type; nothing to explain");
        }
    }
    out.fields
}

/// Output buffer that drops fields without a value.
pub(crate) struct FieldList<'a> {
    pub(crate) ctx: ExplainContext<'a>,
    fields: Vec<ExplainedField>,
}

impl<'a> FieldList<'a> {
    fn new(ctx: ExplainContext<'a>) -> Self {
        Self {
            ctx,
            fields: Vec::new(),
        }
    }

    pub(crate) fn loc(&self) -> &'a dyn Localizer {
        self.ctx.localizer
    }

    pub(crate) fn push(
        &mut self,
        key: FieldKey,
        label: String,
        raw_value: String,
        explanation: String,
    ) {
        self.push_with_meta(key, label, raw_value, explanation, None);
    }

    pub(crate) fn push_with_meta(
        &mut self,
        key: FieldKey,
        label: String,
        raw_value: String,
        explanation: String,
        meta: Option<FieldMeta>,
    ) {
        if raw_value.trim().is_empty() {
            return;
        }
        self.fields.push(ExplainedField {
            key,
            label,
            raw_value,
            explanation,
            meta,
        });
    }
}

/// Wind sentence from the `explain.<family>.wind*` templates.
pub(crate) fn wind_sentence(loc: &dyn Localizer, family: &str, wind: &Wind) -> String {
    if format::is_variable(wind) {
        let speed = format::wind_speed(wind, wind.speed_kt);
        return tr!(loc, &format!("explain.{family}.wind_vrb"), speed = speed);
    }
    match wind.gust_kt {
        Some(gust) if gust > 0 => tr!(
            loc,
            &format!("explain.{family}.wind_gust"),
            wind = format::wind_base(wind),
            gust = format::wind_speed(wind, gust),
        ),
        _ => tr!(loc, &format!("explain.{family}.wind"), wind = format::wind(wind)),
    }
}

pub(crate) fn visibility_text(value: VisibilityValue<'_>) -> String {
    match value {
        VisibilityValue::Metres(metres) => format::visibility_m(metres),
        VisibilityValue::Raw(raw) => raw.to_string(),
    }
}

pub(crate) fn tendency_text(loc: &dyn Localizer, tendency: RvrTendency) -> Option<String> {
    let key = match tendency {
        RvrTendency::Up => "analysis.tendency.up",
        RvrTendency::Down => "analysis.tendency.down",
        RvrTendency::NoChange => "analysis.tendency.no_change",
        RvrTendency::None => return None,
    };
    Some(loc.text(key))
}

/// `BECMG (becoming)` when the catalog knows the keyword, else the keyword.
pub(crate) fn trend_gloss(loc: &dyn Localizer, kind: &str) -> String {
    let key = format!("trend.kind.{}", kind.to_uppercase());
    match loc.template(&key) {
        Some(meaning) => format::gloss(loc, kind, meaning),
        None => kind.to_string(),
    }
}

/// The cloud summary field with a per-layer breakdown.
pub(crate) fn push_clouds(out: &mut FieldList<'_>, family: &str, layers: &[CloudLayer]) {
    let loc = out.loc();
    let lexicons = out.ctx.lexicons;
    let template = format!("explain.{family}.clouds");
    let details: Vec<LayerDetail> = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let value = explain_cloud_layer(layer, lexicons, loc);
            let explanation = tr!(loc, &template, clouds = value);
            LayerDetail {
                index,
                value,
                explanation,
            }
        })
        .collect();
    if details.is_empty() {
        return;
    }

    let raw_value = layers
        .iter()
        .map(format::cloud_layer)
        .collect::<Vec<_>>()
        .join(", ");
    let summary = details
        .iter()
        .map(|d| d.value.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    out.push_with_meta(
        FieldKey::Clouds,
        loc.text("fields.clouds"),
        raw_value,
        tr!(loc, &template, clouds = summary),
        Some(FieldMeta::Clouds(details)),
    );
}

/// Tokens the decoder left unrecognised.
pub(crate) fn push_raw_tokens(out: &mut FieldList<'_>, tokens: &[String]) {
    let loc = out.loc();
    let joined = tokens.join(" ");
    let explanation = tr!(loc, "explain.metar.raw", tokens = joined);
    out.push(FieldKey::RawTokens, loc.text("fields.raw_tokens"), joined, explanation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxgloss_foundation::Locale;
    use wxgloss_lexicon::{Catalog, LexiconSet};

    #[test]
    fn empty_values_are_dropped() {
        let catalog = Catalog::builtin(Locale::En);
        let lexicons = LexiconSet::builtin();
        let mut out = FieldList::new(ExplainContext::new(&catalog, &lexicons));
        out.push(FieldKey::Station, "Station".into(), "  ".into(), "x".into());
        out.push(FieldKey::Station, "Station".into(), "EGLL".into(), String::new());
        assert_eq!(out.fields.len(), 1);
        assert_eq!(out.fields[0].raw_value, "EGLL");
    }

    #[test]
    fn wind_sentences() {
        let en = Catalog::builtin(Locale::En);
        let gusty = Wind {
            direction_deg: Some(240),
            speed_kt: 15,
            gust_kt: Some(25),
            ..Wind::default()
        };
        assert_eq!(wind_sentence(&en, "metar", &gusty), "Wind 240° 15kt, gusting to 25kt.");

        let vrb = Wind {
            variable: true,
            speed_kt: 3,
            ..Wind::default()
        };
        assert_eq!(wind_sentence(&en, "taf", &vrb), "Forecast wind variable in direction at 3kt.");
    }

    #[test]
    fn trend_keywords_gloss() {
        let en = Catalog::builtin(Locale::En);
        assert_eq!(trend_gloss(&en, "BECMG"), "BECMG (becoming)");
        assert_eq!(trend_gloss(&en, "FM"), "FM");
    }

    #[test]
    fn unknown_type_explains_nothing() {
        let catalog = Catalog::builtin(Locale::En);
        let lexicons = LexiconSet::builtin();
        let ctx = ExplainContext::new(&catalog, &lexicons);
        let mut message = StructuredMessage::default();
        message.parsed.station = Some("EGLL".into());
        assert!(explain(&message, &ctx).is_empty());
        assert_eq!(explain_as(&message, MessageType::Metar, &ctx).len(), 1);
    }
}
