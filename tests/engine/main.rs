//! Integration tests for Layer 2: Engine
//!
//! Tests classification, explanation and the join between them over the
//! JSON fixtures.

mod fixtures;
mod locales;
mod properties;

use wxgloss_engine::{Analysis, ExplainContext, analyze};
use wxgloss_foundation::{Locale, StructuredMessage};
use wxgloss_lexicon::{Catalog, LexiconSet};

pub const METAR: &str = include_str!("../fixtures/metar_egll.json");
pub const TAF: &str = include_str!("../fixtures/taf_egll.json");
pub const NOTAM: &str = include_str!("../fixtures/notam_egll.json");
pub const BATCH: &str = include_str!("../fixtures/batch.json");

/// Reads a fixture document holding one message.
pub fn message(json: &str) -> StructuredMessage {
    StructuredMessage::from_json_str(json).unwrap()
}

/// Analyzes a message with the built-in data for `locale`.
pub fn analyze_in(message: &StructuredMessage, locale: Locale) -> Analysis {
    let catalog = Catalog::builtin(locale);
    let lexicons = LexiconSet::builtin();
    analyze(message, &ExplainContext::new(&catalog, &lexicons))
}

/// Display keys of the classified tokens.
pub fn token_keys(analysis: &Analysis) -> Vec<String> {
    analysis.tokens.iter().map(|t| t.field_key.to_string()).collect()
}

/// Display keys of the explained fields.
pub fn field_keys(analysis: &Analysis) -> Vec<String> {
    analysis.fields.iter().map(|f| f.key.to_string()).collect()
}
