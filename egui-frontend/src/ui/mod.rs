//! # UI Module
//!
//! Everything egui-specific: the app state struct, the frame coordinator,
//! per-concern state and the rendering components.
//!
//! Other modules can import everything they need with:
//! ```rust,ignore
//! use crate::ui::*;
//! ```

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::*;
pub use components::*;
