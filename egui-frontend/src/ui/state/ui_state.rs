//! # UI State Module
//!
//! General UI state that is not tied to the calculator: which tab is open and
//! whether the sidebar growth chart is expanded.

use crate::content::ManualTab;

/// General UI state for navigation and optional panels
#[derive(Debug)]
pub struct UIState {
    /// Currently open tab of the manual
    pub current_tab: ManualTab,

    /// Whether the year-by-year growth chart is shown in the sidebar
    pub show_growth_chart: bool,
}

impl UIState {
    /// Create new UI state on the first tab with the chart expanded
    pub fn new() -> Self {
        Self {
            current_tab: ManualTab::default(),
            show_growth_chart: true,
        }
    }

    /// Switch tabs, returning whether the tab actually changed
    pub fn select_tab(&mut self, tab: ManualTab) -> bool {
        if self.current_tab == tab {
            return false;
        }
        log::info!("📄 Switched tab: {} -> {}", self.current_tab.title(), tab.title());
        self.current_tab = tab;
        true
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tab() {
        let mut state = UIState::new();
        assert_eq!(state.current_tab, ManualTab::BuildingBlocks);

        assert!(state.select_tab(ManualTab::DeepWater));
        assert_eq!(state.current_tab, ManualTab::DeepWater);
        assert!(!state.select_tab(ManualTab::DeepWater));
    }
}
