//! # Page Renderer Module
//!
//! Draws a manual `Page` block by block. Inline `**bold**` / `*italic*` markup
//! is turned into an egui `LayoutJob` so a paragraph stays a single wrapping
//! label.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};

use crate::content::{parse_inline, Block, Page, SpanStyle};
use crate::ui::components::styling::{card_frame, page_heading, section_heading};
use crate::ui::components::theme::colors;

const BODY_FONT_SIZE: f32 = 15.0;

/// Render a full page inside a card
pub fn render_page(ui: &mut egui::Ui, page: &Page) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(page_heading(page.header));
        ui.add_space(4.0);
        ui.label(inline_job(page.intro, BODY_FONT_SIZE));
        ui.add_space(10.0);

        render_blocks(ui, page.blocks);
    });
}

fn render_blocks(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        render_block(ui, block);
    }
}

fn render_block(ui: &mut egui::Ui, block: &Block) {
    match block {
        Block::Subheader(text) => {
            ui.add_space(10.0);
            ui.label(section_heading(text));
            ui.add_space(2.0);
        }
        Block::Paragraph(text) => {
            ui.label(inline_job(text, BODY_FONT_SIZE));
        }
        Block::Bullets(items) => {
            ui.indent(ui.next_auto_id(), |ui| {
                for item in items.iter() {
                    ui.label(list_item_job("•", item));
                }
            });
        }
        Block::Numbered(items) => {
            ui.indent(ui.next_auto_id(), |ui| {
                for (index, item) in items.iter().enumerate() {
                    ui.label(list_item_job(&format!("{}.", index + 1), item));
                }
            });
        }
        Block::Columns(columns) => {
            ui.add_space(4.0);
            ui.columns(columns.len().max(1), |column_uis| {
                for (column_ui, column) in column_uis.iter_mut().zip(columns.iter()) {
                    render_blocks(column_ui, column.blocks);
                }
            });
        }
        Block::Divider => {
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(6.0);
        }
    }
}

fn list_item_job(marker: &str, text: &str) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        &format!("{}  ", marker),
        0.0,
        span_format(SpanStyle::Plain, BODY_FONT_SIZE),
    );
    append_inline(&mut job, text, BODY_FONT_SIZE);
    job
}

/// Lay out inline markup as one styled text job
pub fn inline_job(text: &str, font_size: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    append_inline(&mut job, text, font_size);
    job
}

fn append_inline(job: &mut LayoutJob, text: &str, font_size: f32) {
    for span in parse_inline(text) {
        job.append(&span.text, 0.0, span_format(span.style, font_size));
    }
}

fn span_format(style: SpanStyle, font_size: f32) -> TextFormat {
    let font_id = egui::FontId::new(font_size, egui::FontFamily::Proportional);
    match style {
        SpanStyle::Plain => TextFormat::simple(font_id, colors::TEXT_PRIMARY),
        // egui has no bold weight for the default font; darker text stands in
        SpanStyle::Bold => TextFormat::simple(font_id, colors::TEXT_EMPHASIS),
        SpanStyle::Italic => TextFormat {
            italics: true,
            ..TextFormat::simple(font_id, colors::TEXT_PRIMARY)
        },
    }
}
