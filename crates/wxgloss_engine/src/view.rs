//! Source selection over a structured message.
//!
//! The explainer and the classifier must agree on which list a value comes
//! from, or indexed keys stop joining. Every "normalized, else parsed" choice
//! lives here and nowhere else.

use wxgloss_foundation::{CloudLayer, Rvr, StructuredMessage, ValidityPeriod, Wind, WindVariation};

/// Prevailing visibility, by source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VisibilityValue<'a> {
    /// Normalized distance in metres.
    Metres(u32),
    /// The raw group when no normalized distance exists.
    Raw(&'a str),
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct MessageView<'a> {
    message: &'a StructuredMessage,
}

impl<'a> MessageView<'a> {
    pub(crate) fn new(message: &'a StructuredMessage) -> Self {
        Self { message }
    }

    pub(crate) fn message(&self) -> &'a StructuredMessage {
        self.message
    }

    pub(crate) fn wind(&self) -> Option<&'a Wind> {
        self.message
            .normalized
            .wind
            .as_ref()
            .or(self.message.parsed.wind.as_ref())
    }

    pub(crate) fn wind_variation(&self) -> Option<&'a WindVariation> {
        self.message
            .normalized
            .wind_variation
            .as_ref()
            .or(self.message.parsed.wind_variation.as_ref())
    }

    pub(crate) fn visibility(&self) -> Option<VisibilityValue<'a>> {
        if let Some(metres) = self.message.normalized.visibility_m {
            return Some(VisibilityValue::Metres(metres));
        }
        self.message
            .parsed
            .visibility
            .as_ref()
            .map(|v| v.raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(VisibilityValue::Raw)
    }

    /// RVR list that indexed `rvr_<i>` keys refer to.
    pub(crate) fn rvr(&self) -> &'a [Rvr] {
        if self.message.normalized.rvr.is_empty() {
            &self.message.parsed.rvr
        } else {
            &self.message.normalized.rvr
        }
    }

    pub(crate) fn clouds(&self) -> &'a [CloudLayer] {
        &self.message.parsed.clouds
    }

    pub(crate) fn trend_count(&self) -> usize {
        self.message
            .parsed
            .trends
            .len()
            .max(self.message.normalized.trends.len())
    }

    pub(crate) fn trend_kind(&self, index: usize) -> Option<&'a str> {
        let parsed = self.message.parsed.trends.get(index).map(|t| t.kind.as_str());
        let normalized = self.message.normalized.trends.get(index).map(|t| t.kind.as_str());
        parsed
            .filter(|kind| !kind.is_empty())
            .or(normalized)
            .filter(|kind| !kind.is_empty())
    }

    pub(crate) fn trend_period(&self, index: usize) -> Option<&'a ValidityPeriod> {
        self.message
            .parsed
            .trends
            .get(index)
            .and_then(|t| t.period.as_ref())
            .or_else(|| {
                self.message
                    .normalized
                    .trends
                    .get(index)
                    .and_then(|t| t.period.as_ref())
            })
    }

    /// Normalized trend wind, else the parsed one.
    pub(crate) fn trend_wind(&self, index: usize) -> Option<&'a Wind> {
        self.message
            .normalized
            .trends
            .get(index)
            .and_then(|t| t.wind.as_ref())
            .or_else(|| {
                self.message
                    .parsed
                    .trends
                    .get(index)
                    .and_then(|t| t.wind.as_ref())
            })
    }

    pub(crate) fn trend_visibility(&self, index: usize) -> Option<VisibilityValue<'a>> {
        if let Some(metres) = self
            .message
            .normalized
            .trends
            .get(index)
            .and_then(|t| t.visibility_m)
        {
            return Some(VisibilityValue::Metres(metres));
        }
        self.message
            .parsed
            .trends
            .get(index)
            .and_then(|t| t.visibility.as_ref())
            .map(|v| v.raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(VisibilityValue::Raw)
    }

    pub(crate) fn trend_weather(&self, index: usize) -> &'a [String] {
        match self.message.parsed.trends.get(index) {
            Some(trend) if !trend.weather.is_empty() => &trend.weather,
            _ => self
                .message
                .normalized
                .trends
                .get(index)
                .map_or(&[], |t| t.weather.as_slice()),
        }
    }

    pub(crate) fn trend_clouds(&self, index: usize) -> &'a [CloudLayer] {
        match self.message.parsed.trends.get(index) {
            Some(trend) if !trend.clouds.is_empty() => &trend.clouds,
            _ => self
                .message
                .normalized
                .trends
                .get(index)
                .map_or(&[], |t| t.clouds.as_slice()),
        }
    }
}
