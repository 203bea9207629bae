//! # Growth Chart Module
//!
//! Compact year-by-year balance chart for the sidebar, drawn with egui_plot.
//! A flat principal line sits under the growth curve so the compounding gap
//! is visible at a glance.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use shared::{format_amount, GrowthPoint};

use crate::ui::components::theme::colors;

const CHART_HEIGHT: f32 = 160.0;

/// Convert schedule points into plot coordinates
pub fn growth_line_points(points: &[GrowthPoint]) -> Vec<[f64; 2]> {
    points.iter().map(|point| [point.year, point.balance]).collect()
}

/// Flat line at the principal spanning the same years as the schedule
pub fn principal_line_points(points: &[GrowthPoint], principal: f64) -> Vec<[f64; 2]> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => vec![[first.year, principal], [last.year, principal]],
        _ => Vec::new(),
    }
}

/// Render the growth chart (the schedule is computed by the caller)
pub fn render_growth_chart(ui: &mut egui::Ui, points: &[GrowthPoint], principal: f64) {
    if points.len() < 2 {
        ui.label(
            egui::RichText::new("📊 Hold for at least a year to see growth")
                .small()
                .color(colors::TEXT_SECONDARY),
        );
        return;
    }

    let growth = Line::new(PlotPoints::from(growth_line_points(points)))
        .color(colors::GROWTH_LINE)
        .width(2.0)
        .name("Balance");
    let baseline = Line::new(PlotPoints::from(principal_line_points(points, principal)))
        .color(colors::PRINCIPAL_LINE)
        .style(egui_plot::LineStyle::dashed_loose())
        .name("Principal");

    Plot::new("growth_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Years")
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}\nYear {:.0}: {}", name, value.x, format_amount(value.y))
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(baseline);
            plot_ui.line(growth);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GrowthInputs;

    #[test]
    fn test_growth_line_points_follow_schedule() {
        let schedule = GrowthInputs::new(1000.0, 8.0, 3.0).schedule().unwrap();
        let line = growth_line_points(&schedule);
        assert_eq!(line.len(), 4);
        assert_eq!(line[0], [0.0, 1000.0]);
        assert_eq!(line[3][0], 3.0);
    }

    #[test]
    fn test_principal_line_spans_schedule() {
        let schedule = GrowthInputs::new(500.0, 5.0, 10.0).schedule().unwrap();
        assert_eq!(
            principal_line_points(&schedule, 500.0),
            vec![[0.0, 500.0], [10.0, 500.0]]
        );
        assert!(principal_line_points(&[], 500.0).is_empty());
    }
}
