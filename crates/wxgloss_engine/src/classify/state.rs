//! Scan state threaded through classification.

use wxgloss_foundation::{FieldKey, MessageType};

/// Where the scan is relative to TAF change groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrendState {
    /// Top-level forecast.
    #[default]
    Outside,
    /// Inside the change group at this index.
    InTrend(usize),
}

impl TrendState {
    /// The state after a change-group keyword.
    #[must_use]
    pub fn enter_next(self) -> Self {
        match self {
            Self::Outside => Self::InTrend(0),
            Self::InTrend(index) => Self::InTrend(index + 1),
        }
    }

    /// The current change-group index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Outside => None,
            Self::InTrend(index) => Some(index),
        }
    }
}

const CHANGE_GROUPS: [&str; 2] = ["BECMG", "TEMPO"];

pub(crate) const REMARK_MARKER: &str = "RMK";

/// Everything the rules may know about tokens already seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScanState {
    pub(crate) trend: TrendState,
    pub(crate) extremes_seen: usize,
    /// Next expected remark position once `RMK` has been seen.
    pub(crate) remark_cursor: Option<usize>,
    pub(crate) notam_section: Option<FieldKey>,
}

impl ScanState {
    /// Transitions driven by the token itself, applied before its rules run.
    pub(crate) fn advance(&mut self, upper: &str, kind: MessageType) {
        if kind == MessageType::Taf && CHANGE_GROUPS.contains(&upper) {
            self.trend = self.trend.enter_next();
        }
        if kind != MessageType::Notam && upper == REMARK_MARKER {
            self.remark_cursor = Some(0);
        }
    }

    /// Transitions driven by the key the token was given.
    pub(crate) fn settle(&mut self, key: FieldKey) {
        match key {
            FieldKey::TemperatureExtreme(_) => self.extremes_seen += 1,
            FieldKey::RemarkItem(Some(index)) => self.remark_cursor = Some(index + 1),
            FieldKey::QLineFull | FieldKey::Notam(_) => self.notam_section = Some(key),
            _ => {}
        }
    }

    pub(crate) fn in_remarks(&self) -> bool {
        self.remark_cursor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxgloss_foundation::NotamItem;

    #[test]
    fn change_groups_advance_trend_index() {
        let mut state = ScanState::default();
        state.advance("BECMG", MessageType::Taf);
        assert_eq!(state.trend, TrendState::InTrend(0));
        state.advance("TEMPO", MessageType::Taf);
        assert_eq!(state.trend.index(), Some(1));
    }

    #[test]
    fn metar_trend_keywords_do_not_enter_groups() {
        let mut state = ScanState::default();
        state.advance("BECMG", MessageType::Metar);
        assert_eq!(state.trend, TrendState::Outside);
    }

    #[test]
    fn remark_marker_opens_section() {
        let mut state = ScanState::default();
        assert!(!state.in_remarks());
        state.advance("RMK", MessageType::Metar);
        assert_eq!(state.remark_cursor, Some(0));
        state.settle(FieldKey::RemarkItem(Some(2)));
        assert_eq!(state.remark_cursor, Some(3));
    }

    #[test]
    fn notam_items_open_sections() {
        let mut state = ScanState::default();
        state.settle(FieldKey::Notam(NotamItem::E));
        assert_eq!(state.notam_section, Some(FieldKey::Notam(NotamItem::E)));
        state.settle(FieldKey::TemperatureExtreme(0));
        assert_eq!(state.extremes_seen, 1);
    }
}
