//! Cell renderers, one per [`CellContent`] variant.

use egui::{Image, Sense, Ui, Vec2};
use roster_business::CellContent;

use crate::utils::{
    chip::{ChipStyle, chip},
    colors::COLOR_AVATAR_PLACEHOLDER,
};

pub fn render_cell(ui: &mut Ui, content: &CellContent, avatar_size: f32) {
    match content {
        CellContent::Blank => {}
        CellContent::Text(text) => {
            ui.label(text);
        }
        CellContent::Avatar(Some(url)) => render_avatar(ui, url, avatar_size),
        CellContent::Avatar(None) => render_avatar_placeholder(ui, avatar_size),
        CellContent::Badge(label) => {
            chip(ui, label, ChipStyle::Primary);
        }
        CellContent::Tags(tags) => {
            for tag in tags {
                chip(ui, tag, ChipStyle::Plain);
            }
        }
    }
}

/// Circular image loaded through the installed image loaders.
fn render_avatar(ui: &mut Ui, url: &str, size: f32) {
    ui.add(
        Image::new(url)
            .fit_to_exact_size(Vec2::splat(size))
            .corner_radius(size / 2.0),
    )
    .on_hover_text(url);
}

fn render_avatar_placeholder(ui: &mut Ui, size: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), size / 2.0, COLOR_AVATAR_PLACEHOLDER);
}
