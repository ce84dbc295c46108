//! Token classifier.
//!
//! Assigns a [`FieldKey`] to every whitespace-delimited token of the raw
//! message. Each token is run through an ordered rule table, first match
//! wins, with a small scan state carried from token to token (TAF change
//! groups, the remark section, the current NOTAM item).

mod rules;
mod state;

use wxgloss_decode::{explain_remark, format};
use wxgloss_foundation::{ClassifiedToken, FieldKey, MessageType, StructuredMessage};

pub use state::TrendState;

use self::rules::Probe;
use self::state::ScanState;
use crate::context::ExplainContext;
use crate::view::MessageView;

/// Classifies every token of `message` as its effective type.
#[must_use]
pub fn classify(message: &StructuredMessage, ctx: &ExplainContext<'_>) -> Vec<ClassifiedToken> {
    classify_as(message, message.effective_type(), ctx)
}

/// Classifies every token of `message` as `kind`.
///
/// The result has one entry per token, in token order.
#[must_use]
pub fn classify_as(
    message: &StructuredMessage,
    kind: MessageType,
    ctx: &ExplainContext<'_>,
) -> Vec<ClassifiedToken> {
    let view = MessageView::new(message);
    let mut state = ScanState::default();
    let mut out = Vec::new();

    for token in message.tokens() {
        let upper = token.to_uppercase();
        state.advance(&upper, kind);

        let probe = Probe {
            token,
            upper: &upper,
            view: &view,
            kind,
            state: &state,
        };
        let (rule, key) = match rules::first_match(&probe) {
            Some(rule) => (rule.name, (rule.assign)(&probe)),
            None => ("raw", FieldKey::RawTokens),
        };
        tracing::trace!(token, rule, key = %key, "classified");

        let cloud_layer = match key {
            FieldKey::Clouds => rules::match_cloud_layer(&upper, view.clouds()),
            _ => None,
        };
        out.push(ClassifiedToken {
            token: token.to_string(),
            field_key: key,
            label: ctx.localizer.text(key.label_key()),
            detail: detail(key, token, &view, ctx),
            cloud_layer,
        });
        state.settle(key);
    }
    out
}

fn detail(key: FieldKey, token: &str, view: &MessageView<'_>, ctx: &ExplainContext<'_>) -> String {
    match key {
        FieldKey::Issue => view
            .message()
            .parsed
            .issue_time
            .as_ref()
            .map(format::utc_time)
            .unwrap_or_default(),
        FieldKey::RemarkItem(_) => explain_remark(token, ctx.localizer),
        _ => String::new(),
    }
}
