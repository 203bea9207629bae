//! # App State Module
//!
//! Central application struct for the investor manual.
//!
//! ## Key Types:
//! - `InvestorManualApp` - Owns configuration, calculator widget state and UI state
//!
//! ## State Management:
//! All mutable state lives here and is handed to the render functions each
//! frame. There is no global state: the calculator reads a fresh
//! `GrowthInputs` value from `CalculatorState` every time it is drawn.

use log::info;

use crate::config::AppConfig;
use crate::ui::state::{CalculatorState, UIState};

/// Main application struct for the egui investor manual
pub struct InvestorManualApp {
    pub config: AppConfig,
    pub calculator: CalculatorState,
    pub ui: UIState,
}

impl InvestorManualApp {
    /// Create the app and install its visual style
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing InvestorManualApp");

        crate::ui::setup_manual_style(&cc.egui_ctx);

        Self::from_config(config)
    }

    /// Build the app state without an egui context
    pub fn from_config(config: AppConfig) -> Result<Self, anyhow::Error> {
        config.validate()?;

        Ok(Self {
            calculator: CalculatorState::new(config.calculator),
            ui: UIState::new(),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ManualTab;
    use shared::NumberRange;

    #[test]
    fn test_from_default_config() {
        let app = InvestorManualApp::from_config(AppConfig::default()).unwrap();
        assert_eq!(app.ui.current_tab, ManualTab::BuildingBlocks);
        assert!(app.calculator.is_at_defaults());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.calculator.years = NumberRange::bounded(10.0, 1.0, 5.0, 1.0);
        assert!(InvestorManualApp::from_config(config).is_err());
    }
}
