//! # Styling Module
//!
//! Global egui styling and small drawing helpers shared by the header, the
//! sidebar and the manual pages.
//!
//! ## Key Functions:
//! - `setup_manual_style()` - Configure global egui styling once at startup
//! - `card_frame()` - White card used for the metric and the page body
//! - `section_heading()` / `page_heading()` - Consistent heading text

use eframe::egui;

use super::theme::colors;

/// Setup the document-style UI styling for the entire application
pub fn setup_manual_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);
        style.visuals.button_frame = true;

        // Roomier text for long-form reading
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.slider_width = 180.0;
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, colors::HOVER_BORDER);

        style
    });
}

/// White card with a thin border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(14.0, 12.0))
}

/// Heading at the top of a manual page
pub fn page_heading(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
        .color(colors::TEXT_HEADING)
        .strong()
}

/// Heading for a section within a page or the sidebar
pub fn section_heading(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .font(egui::FontId::new(19.0, egui::FontFamily::Proportional))
        .color(colors::TEXT_HEADING)
        .strong()
}
