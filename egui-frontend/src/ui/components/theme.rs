//! # Theme Configuration
//!
//! Centralized color configuration for the investor manual. All visual styling
//! should use these constants so the look stays consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::{colors, CURRENT_THEME};
//!
//! let accent = CURRENT_THEME.interactive.active_background;
//! let text = colors::TEXT_PRIMARY;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (tab buttons, reset button)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Sidebar calculator colors
    pub calculator: CalculatorColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Outline drawn around hovered buttons
    pub hover_border: Color32,
    /// Selected tab background
    pub active_background: Color32,
    /// Unselected tab background
    pub inactive_background: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub page_background: Color32,
    pub sidebar_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Body text
    pub primary: Color32,
    /// Captions and the footer
    pub secondary: Color32,
    pub heading: Color32,
    /// Bold spans inside paragraphs
    pub emphasis: Color32,
    /// Text on the active tab
    pub active: Color32,
}

/// Sidebar calculator colors
#[derive(Debug, Clone)]
pub struct CalculatorColors {
    /// "Final Balance" metric value
    pub metric_value: Color32,
    /// Growth chart line
    pub growth_line: Color32,
    /// Principal baseline in the growth chart
    pub principal_line: Color32,
    pub error: Color32,
}

/// The current active theme - calm navy and gold
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        hover_border: Color32::from_rgb(196, 160, 82),
        active_background: Color32::from_rgb(28, 53, 94),
        inactive_background: Color32::from_rgb(240, 242, 246),
    },
    layout: LayoutColors {
        page_background: Color32::from_rgb(252, 252, 250),
        sidebar_background: Color32::from_rgb(240, 242, 246),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(220, 224, 230),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(49, 51, 63),
        secondary: Color32::from_rgb(110, 114, 126),
        heading: Color32::from_rgb(28, 53, 94),
        emphasis: Color32::from_rgb(20, 20, 28),
        active: Color32::WHITE,
    },
    calculator: CalculatorColors {
        metric_value: Color32::from_rgb(24, 121, 78),
        growth_line: Color32::from_rgb(196, 160, 82),
        principal_line: Color32::from_rgb(150, 156, 168),
        error: Color32::from_rgb(200, 40, 50),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const HOVER_BORDER: Color32 = CURRENT_THEME.interactive.hover_border;
    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_EMPHASIS: Color32 = CURRENT_THEME.typography.emphasis;
    pub const TEXT_ACTIVE: Color32 = CURRENT_THEME.typography.active;

    pub const PAGE_BACKGROUND: Color32 = CURRENT_THEME.layout.page_background;
    pub const SIDEBAR_BACKGROUND: Color32 = CURRENT_THEME.layout.sidebar_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;

    pub const METRIC_VALUE: Color32 = CURRENT_THEME.calculator.metric_value;
    pub const GROWTH_LINE: Color32 = CURRENT_THEME.calculator.growth_line;
    pub const PRINCIPAL_LINE: Color32 = CURRENT_THEME.calculator.principal_line;
    pub const ERROR: Color32 = CURRENT_THEME.calculator.error;
}
