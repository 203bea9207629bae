//! # Manual Content
//!
//! The five pages of the manual, modelled as data so the renderer stays a thin
//! layer over egui.
//!
//! ## Key Types:
//! - `ManualTab` - The five tabs, in display order
//! - `Page` / `Block` / `Column` - Static document structure
//! - `Span` - A run of inline text parsed from `**bold**` / `*italic*` markup

mod pages;

pub use pages::{FOOTER_CAPTION, PAGE_SUBTITLE, PAGE_TITLE};

/// Tabs of the manual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualTab {
    BuildingBlocks,
    WhereTradingHappens,
    MechanicsOfTheTrade,
    DeepWater,
    ExecutionProcess,
}

impl ManualTab {
    /// All tabs in display order
    pub const ALL: [ManualTab; 5] = [
        ManualTab::BuildingBlocks,
        ManualTab::WhereTradingHappens,
        ManualTab::MechanicsOfTheTrade,
        ManualTab::DeepWater,
        ManualTab::ExecutionProcess,
    ];

    /// Label shown on the tab button
    pub fn title(&self) -> &'static str {
        match self {
            ManualTab::BuildingBlocks => "1. The Building Blocks",
            ManualTab::WhereTradingHappens => "2. Where Trading Happens",
            ManualTab::MechanicsOfTheTrade => "3. Mechanics of the Trade",
            ManualTab::DeepWater => "4. Deep Water (Advanced)",
            ManualTab::ExecutionProcess => "5. The Execution Process",
        }
    }

    pub fn page(&self) -> &'static Page {
        match self {
            ManualTab::BuildingBlocks => &pages::BUILDING_BLOCKS,
            ManualTab::WhereTradingHappens => &pages::WHERE_TRADING_HAPPENS,
            ManualTab::MechanicsOfTheTrade => &pages::MECHANICS_OF_THE_TRADE,
            ManualTab::DeepWater => &pages::DEEP_WATER,
            ManualTab::ExecutionProcess => &pages::EXECUTION_PROCESS,
        }
    }
}

impl Default for ManualTab {
    fn default() -> Self {
        ManualTab::BuildingBlocks
    }
}

/// One tab's document
#[derive(Debug)]
pub struct Page {
    pub header: &'static str,
    pub intro: &'static str,
    pub blocks: &'static [Block],
}

/// A vertical section of a page
#[derive(Debug)]
pub enum Block {
    Subheader(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Numbered(&'static [&'static str]),
    /// Side-by-side columns of equal width
    Columns(&'static [Column]),
    Divider,
}

#[derive(Debug)]
pub struct Column {
    pub blocks: &'static [Block],
}

/// Inline text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Split text with `**bold**` and `*italic*` markers into styled spans.
///
/// Markers without a closing partner are kept as literal text.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**").filter(|end| *end > 0) {
                flush_plain(&mut spans, &mut plain);
                spans.push(Span::new(&after[..end], SpanStyle::Bold));
                rest = &after[end + 2..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix('*') {
            if let Some(end) = after.find('*').filter(|end| *end > 0) {
                flush_plain(&mut spans, &mut plain);
                spans.push(Span::new(&after[..end], SpanStyle::Italic));
                rest = &after[end + 1..];
                continue;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            plain.push(ch);
        }
        rest = chars.as_str();
    }

    flush_plain(&mut spans, &mut plain);
    spans
}

fn flush_plain(spans: &mut Vec<Span>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::new(std::mem::take(plain), SpanStyle::Plain));
    }
}
