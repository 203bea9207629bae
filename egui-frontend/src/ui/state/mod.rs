//! # UI State Modules
//!
//! State is split by concern:
//! - `calculator_state` - Sidebar calculator widget values
//! - `ui_state` - Tab navigation and panel toggles

pub mod calculator_state;
pub mod ui_state;

pub use calculator_state::CalculatorState;
pub use ui_state::UIState;
