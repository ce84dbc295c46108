//! Records produced by the engine.
//!
//! These are in-memory values; `Serialize` flattens them to key/value
//! records for a boundary such as the CLI's JSON output.

use std::fmt;

use serde::Serialize;

use crate::field::FieldKey;

/// One of the eight positional parts of a NOTAM Q-line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QPartKind {
    /// Flight information region.
    Fir,
    /// `Q` + subject + condition.
    QCode,
    /// Traffic flags (I, V, K).
    Traffic,
    /// Purpose flags (N, B, O, M, K).
    Purpose,
    /// Scope flags (A, E, W, K).
    Scope,
    /// Lower vertical limit.
    Lower,
    /// Upper vertical limit.
    Upper,
    /// Centre coordinates and radius.
    Center,
}

impl QPartKind {
    /// All parts in Q-line order.
    pub const ALL: [QPartKind; 8] = [
        QPartKind::Fir,
        QPartKind::QCode,
        QPartKind::Traffic,
        QPartKind::Purpose,
        QPartKind::Scope,
        QPartKind::Lower,
        QPartKind::Upper,
        QPartKind::Center,
    ];

    /// Name used in catalog keys (`notam.q.part_<key>`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fir => "fir",
            Self::QCode => "q_code",
            Self::Traffic => "traffic",
            Self::Purpose => "purpose",
            Self::Scope => "scope",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for QPartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A decoded Q-line part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QLinePart {
    /// Which part this is.
    pub key: QPartKind,
    /// The raw slash-delimited text.
    pub raw: String,
    /// Localized explanation.
    pub explanation: String,
}

/// Explanation of one cloud layer inside a composite cloud field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayerDetail {
    /// Index into the cloud list.
    pub index: usize,
    /// Layer text with gloss (`BKN 2000ft (broken)`).
    pub value: String,
    /// Sentence explaining the layer.
    pub explanation: String,
}

/// Nested detail for composite fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMeta {
    /// Per-layer breakdown of a cloud summary.
    Clouds(Vec<LayerDetail>),
    /// Which Q-line part a `q_line_<n>` field holds.
    QPart(QPartKind),
}

/// A structured field with its human explanation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainedField {
    /// Field identity.
    pub key: FieldKey,
    /// Localized field label.
    pub label: String,
    /// The value as displayed (never empty).
    pub raw_value: String,
    /// Localized explanation; may be empty for self-explanatory values.
    pub explanation: String,
    /// Nested detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<FieldMeta>,
}

/// The field identity assigned to one raw token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedToken {
    /// The token as it appears in the message.
    pub token: String,
    /// Assigned field identity.
    pub field_key: FieldKey,
    /// Localized short label.
    pub label: String,
    /// Extra detail (formatted time, remark decode); may be empty.
    pub detail: String,
    /// Index of the matched top-level cloud layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_layer: Option<usize>,
}
