//! Small rounded labels used by badge and tag cells.

use egui::{Color32, Frame, Margin, Response, RichText, Ui};

use super::colors::{COLOR_CHIP, COLOR_CHIP_TEXT, COLOR_PRIMARY};

const CHIP_RADIUS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipStyle {
    Primary,
    Plain,
}

impl ChipStyle {
    fn colors(self) -> (Color32, Color32) {
        match self {
            Self::Primary => (COLOR_PRIMARY, Color32::WHITE),
            Self::Plain => (COLOR_CHIP, COLOR_CHIP_TEXT),
        }
    }
}

/// Renders `text` inside a filled pill.
pub fn chip(ui: &mut Ui, text: &str, style: ChipStyle) -> Response {
    let (fill, text_color) = style.colors();

    Frame::NONE
        .fill(fill)
        .corner_radius(CHIP_RADIUS)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(text_color));
        })
        .response
}
