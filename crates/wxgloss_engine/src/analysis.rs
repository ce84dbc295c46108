//! Both engine passes over one message, and the join between them.

use serde::Serialize;
use wxgloss_foundation::{ClassifiedToken, ExplainedField, MessageType, StructuredMessage};

use crate::classify::classify_as;
use crate::context::ExplainContext;
use crate::explain::explain_as;

/// Classified tokens and explained fields for one message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// The type both passes ran as.
    pub message_type: MessageType,
    /// One entry per raw token, in token order.
    pub tokens: Vec<ClassifiedToken>,
    /// Explained fields in the type's fixed order.
    pub fields: Vec<ExplainedField>,
}

impl Analysis {
    /// The explained field describing `token`, if any.
    #[must_use]
    pub fn field_for(&self, token: &ClassifiedToken) -> Option<&ExplainedField> {
        field_for(token, &self.fields)
    }

    /// Tokens carrying an indexed key that no explained field covers.
    pub fn unjoined_indexed_tokens(&self) -> impl Iterator<Item = &ClassifiedToken> {
        self.tokens
            .iter()
            .filter(|token| token.field_key.is_indexed() && self.field_for(token).is_none())
    }
}

/// Runs both passes over `message` as its effective type.
#[must_use]
pub fn analyze(message: &StructuredMessage, ctx: &ExplainContext<'_>) -> Analysis {
    let kind = message.effective_type();
    tracing::debug!(%kind, tokens = message.tokens().count(), "analyzing message");
    Analysis {
        message_type: kind,
        tokens: classify_as(message, kind, ctx),
        fields: explain_as(message, kind, ctx),
    }
}

/// The first field whose key `token`'s key covers.
#[must_use]
pub fn field_for<'f>(
    token: &ClassifiedToken,
    fields: &'f [ExplainedField],
) -> Option<&'f ExplainedField> {
    fields.iter().find(|field| token.field_key.covers(&field.key))
}
