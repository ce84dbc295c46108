//! Dependencies injected into the engine.

use wxgloss_foundation::{Locale, StationInfo};
use wxgloss_lexicon::{LexiconSet, Localizer};

/// Read-only collaborators for one explain or classify call.
///
/// Nothing here is mutated; the same context can serve any number of calls,
/// including concurrent ones.
#[derive(Clone, Copy)]
pub struct ExplainContext<'a> {
    /// Template lookup for labels and sentences.
    pub localizer: &'a dyn Localizer,
    /// Code tables for the decoders.
    pub lexicons: &'a LexiconSet,
    /// Display names for the message's station, if known.
    pub station: Option<&'a StationInfo>,
}

impl<'a> ExplainContext<'a> {
    /// Creates a context without station information.
    #[must_use]
    pub fn new(localizer: &'a dyn Localizer, lexicons: &'a LexiconSet) -> Self {
        Self {
            localizer,
            lexicons,
            station: None,
        }
    }

    /// Attaches station display names.
    #[must_use]
    pub fn with_station(mut self, station: &'a StationInfo) -> Self {
        self.station = Some(station);
        self
    }

    /// The locale text is rendered in.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.localizer.locale()
    }

    /// `CODE · Name` when station names are known for `code`, else `code`.
    #[must_use]
    pub fn station_display(&self, code: &str) -> String {
        match self.station {
            Some(info) if info.code.eq_ignore_ascii_case(code) => info.display(self.locale()),
            _ => code.to_string(),
        }
    }
}

impl std::fmt::Debug for ExplainContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplainContext")
            .field("locale", &self.locale())
            .field("station", &self.station.map(|s| s.code.as_str()))
            .finish_non_exhaustive()
    }
}
