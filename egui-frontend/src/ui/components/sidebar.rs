//! # Sidebar Calculator Module
//!
//! "The Magic of Compound Interest" sidebar: three input widgets, the final
//! balance metric, a profit sentence and the optional growth chart.
//!
//! ## Flow:
//! 1. Widgets write straight into `CalculatorState`
//! 2. Any change clamps the values back into the configured ranges
//! 3. The formula is evaluated in full and the result displayed
//!
//! The evaluation runs every frame the sidebar is drawn; nothing is memoized.

use eframe::egui;
use log::info;
use shared::{GrowthResult, NumberRange};

use crate::ui::app_state::InvestorManualApp;
use crate::ui::components::growth_chart::render_growth_chart;
use crate::ui::components::page_renderer::inline_job;
use crate::ui::components::styling::{card_frame, section_heading};
use crate::ui::components::theme::colors;

const SIDEBAR_INTRO: &str = "Compound interest is when the interest you earn on your money begins to \
earn interest itself. Over time, this creates an 'exponential' curve where your wealth grows faster \
every year.";

impl InvestorManualApp {
    /// Render the compound interest sidebar
    pub fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(8.0);
                ui.label(section_heading("⏳ The Magic of Compound Interest"));
                ui.add_space(4.0);
                ui.label(egui::RichText::new(SIDEBAR_INTRO).color(colors::TEXT_PRIMARY));
                ui.add_space(10.0);

                if self.render_calculator_inputs(ui) {
                    // logs the recomputation, or the rejection
                    let _ = self.calculator.apply_widget_changes();
                }

                ui.add_space(6.0);
                ui.separator();
                ui.add_space(6.0);

                match self.calculator.result() {
                    Ok(result) => self.render_result(ui, &result),
                    Err(e) => {
                        ui.colored_label(colors::ERROR, format!("❌ {}", e));
                    }
                }

                ui.add_space(10.0);
                self.render_sidebar_controls(ui);

                if self.ui.show_growth_chart {
                    ui.add_space(6.0);
                    match self.calculator.schedule() {
                        Ok(points) => render_growth_chart(ui, &points, self.calculator.inputs().principal),
                        Err(e) => {
                            ui.colored_label(colors::ERROR, format!("❌ {}", e));
                        }
                    }
                }
            });
    }

    /// Draw the three input widgets, returning whether any value changed
    fn render_calculator_inputs(&mut self, ui: &mut egui::Ui) -> bool {
        let ranges = self.calculator.ranges;
        let mut changed = false;

        ui.label("Starting Investment (Principal)");
        changed |= ui
            .add(principal_drag_value(&mut self.calculator.principal, &ranges.principal))
            .changed();

        ui.add_space(6.0);
        ui.label("Expected Annual Return (%)");
        changed |= ui
            .add(integer_slider(&mut self.calculator.annual_rate_percent, &ranges.annual_rate_percent))
            .changed();

        ui.add_space(6.0);
        ui.label("Number of Years to Hold");
        changed |= ui
            .add(integer_slider(&mut self.calculator.years, &ranges.years))
            .changed();

        changed
    }

    /// "Final Balance" metric and the profit sentence
    fn render_result(&self, ui: &mut egui::Ui, result: &GrowthResult) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Final Balance").color(colors::TEXT_SECONDARY));
            ui.label(
                egui::RichText::new(result.formatted_balance())
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .color(colors::METRIC_VALUE)
                    .strong(),
            );
        });

        ui.add_space(6.0);
        ui.label(inline_job(&profit_sentence(result), 15.0));
    }

    /// Reset button and growth chart toggle
    fn render_sidebar_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let reset = ui.add_enabled(
                !self.calculator.is_at_defaults(),
                egui::Button::new("↺ Reset to defaults"),
            );
            if reset.clicked() {
                self.calculator.reset();
                info!("🔁 Calculator reset to defaults");
            }

            ui.toggle_value(&mut self.ui.show_growth_chart, "📈 Growth chart");
        });
    }
}

/// Sentence under the metric, e.g. "...grew by **5,848.48** due to..."
pub fn profit_sentence(result: &GrowthResult) -> String {
    format!(
        "Your original investment grew by **{}** due to time and compounding.",
        result.formatted_profit()
    )
}

/// The principal input is unbounded above unless the config sets a maximum
fn principal_upper_bound(range: &NumberRange) -> f64 {
    range.max_or(f64::INFINITY)
}

fn principal_drag_value<'a>(value: &'a mut f64, range: &NumberRange) -> egui::DragValue<'a> {
    egui::DragValue::new(value)
        .speed(range.step)
        .clamp_range(range.min..=principal_upper_bound(range))
        .fixed_decimals(2)
}

fn integer_slider<'a>(value: &'a mut f64, range: &NumberRange) -> egui::Slider<'a> {
    egui::Slider::new(value, range.min..=range.max_or(range.min + 100.0 * range.step))
        .step_by(range.step)
        .integer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_sentence_uses_formatted_profit() {
        let result = shared::evaluate(1000.0, 8.0, 25.0).unwrap();
        assert_eq!(
            profit_sentence(&result),
            "Your original investment grew by **5,848.48** due to time and compounding."
        );
    }

    #[test]
    fn test_principal_upper_bound_is_open_by_default() {
        let ranges = shared::InputRanges::default();
        assert_eq!(principal_upper_bound(&ranges.principal), f64::INFINITY);
        assert_eq!(
            principal_upper_bound(&NumberRange::bounded(0.0, 5000.0, 1000.0, 100.0)),
            5000.0
        );
    }
}
