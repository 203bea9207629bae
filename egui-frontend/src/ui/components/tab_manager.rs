//! # Tab Manager Module
//!
//! Tab navigation and content routing for the manual.
//!
//! ## Key Functions:
//! - `draw_tab_toggle_buttons()` - One button per `ManualTab`, highlighting the open one
//! - `render_main_content()` - Renders the open tab's page in a scroll area
//!
//! ## Tab Flow:
//! Clicking a tab button updates `UIState::current_tab`; the next frame routes
//! to that tab's `Page`. New tabs only need a `ManualTab` variant and a page.

use eframe::egui;

use crate::content::ManualTab;
use crate::ui::app_state::InvestorManualApp;
use crate::ui::components::page_renderer::render_page;
use crate::ui::components::theme::colors;

impl InvestorManualApp {
    /// Draw the row of tab buttons
    pub fn draw_tab_toggle_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for tab in ManualTab::ALL {
                let is_active = self.ui.current_tab == tab;

                let (fill, text_color) = if is_active {
                    (colors::ACTIVE_BACKGROUND, colors::TEXT_ACTIVE)
                } else {
                    (colors::INACTIVE_BACKGROUND, colors::TEXT_PRIMARY)
                };

                let button = egui::Button::new(egui::RichText::new(tab.title()).color(text_color))
                    .fill(fill)
                    .rounding(egui::Rounding::same(6.0))
                    .min_size(egui::vec2(0.0, 32.0));

                if ui.add(button).clicked() {
                    self.ui.select_tab(tab);
                }
            }
        });
    }

    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        self.draw_tab_toggle_buttons(ui);
        ui.add_space(8.0);

        let page = self.ui.current_tab.page();
        egui::ScrollArea::vertical()
            .id_source(self.ui.current_tab.title())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                render_page(ui, page);
                ui.add_space(24.0);
            });
    }
}
