//! # UI Components Module
//!
//! This module organizes all UI components for the investor manual.
//!
//! ## Module Organization:
//! - `styling` - Global egui style and shared drawing helpers
//! - `theme` - Color palette
//! - `header` - Page title, subtitle and disclaimer footer
//! - `tab_manager` - Tab navigation and content routing
//! - `page_renderer` - Draws a manual page block by block
//! - `sidebar` - Compound interest calculator widget
//! - `growth_chart` - Year-by-year balance chart under the calculator

pub mod growth_chart;
pub mod header;
pub mod page_renderer;
pub mod sidebar;
pub mod styling;
pub mod tab_manager;
pub mod theme;

pub use styling::{card_frame, page_heading, section_heading, setup_manual_style};
pub use theme::*;
