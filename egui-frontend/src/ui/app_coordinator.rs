//! # App Coordinator Module
//!
//! Main update loop for the investor manual.
//!
//! ## Application Flow (every frame):
//! 1. Header panel with the page title
//! 2. Footer panel with the disclaimer
//! 3. Left sidebar with the compound interest calculator
//! 4. Central panel with the tab buttons and the open page
//!
//! Panels are laid out outermost first, as egui requires side and top/bottom
//! panels before the central panel.

use eframe::egui;

use crate::ui::app_state::InvestorManualApp;
use crate::ui::components::theme::colors;

const SIDEBAR_DEFAULT_WIDTH: f32 = 320.0;

impl eframe::App for InvestorManualApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("manual_header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::TopBottomPanel::bottom("manual_footer").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::SidePanel::left("compound_interest_sidebar")
            .resizable(true)
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .width_range(260.0..=480.0)
            .frame(
                egui::Frame::none()
                    .fill(colors::SIDEBAR_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(14.0, 8.0)),
            )
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(colors::PAGE_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
            )
            .show(ctx, |ui| {
                self.render_main_content(ui);
            });
    }
}
