//! Cloud layer glosses.

use wxgloss_foundation::CloudLayer;
use wxgloss_lexicon::{LexiconSet, LexiconTable, Localizer};

use crate::format::{cloud_layer, gloss};

/// `BKN 2000ft (broken)`, or the formatted layer when the amount is unknown.
#[must_use]
pub fn explain_cloud_layer(
    layer: &CloudLayer,
    lexicons: &LexiconSet,
    loc: &dyn Localizer,
) -> String {
    let base = cloud_layer(layer);
    if layer.amount.is_empty() {
        return base;
    }
    match lexicons.lookup(LexiconTable::CloudAmount, &layer.amount, loc.locale()) {
        Some(meaning) => gloss(loc, &base, meaning),
        None => base,
    }
}

/// Every layer explained, joined with `, `.
#[must_use]
pub fn explain_clouds(layers: &[CloudLayer], lexicons: &LexiconSet, loc: &dyn Localizer) -> String {
    layers
        .iter()
        .map(|layer| explain_cloud_layer(layer, lexicons, loc))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
