//! # Header Module
//!
//! Page title and subtitle at the top of the window, and the disclaimer footer
//! at the bottom.

use eframe::egui;

use crate::content::{FOOTER_CAPTION, PAGE_SUBTITLE, PAGE_TITLE};
use crate::ui::app_state::InvestorManualApp;
use crate::ui::components::theme::colors;

impl InvestorManualApp {
    /// Render the header
    pub fn render_header(&self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none().inner_margin(egui::Margin::symmetric(16.0, 12.0));

        frame.show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(PAGE_TITLE)
                        .font(egui::FontId::new(30.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_HEADING)
                        .strong(),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(PAGE_SUBTITLE)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                )
                .selectable(false),
            );
        });
    }

    /// Render the disclaimer footer
    pub fn render_footer(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new(FOOTER_CAPTION)
                    .small()
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(4.0);
    }
}
