//! Body row rendering.

use egui::Checkbox;
use egui_extras::TableRow;
use roster_business::{ColumnDef, RowRecord};

use super::cells::render_cell;

/// Renders one record. Returns `true` if its checkbox was clicked.
///
/// Selected rows are drawn highlighted.
pub fn render_row(
    row: &mut TableRow<'_, '_>,
    record: &RowRecord,
    columns: &[ColumnDef],
    selected: bool,
    avatar_size: f32,
) -> bool {
    let mut toggled = false;
    row.set_selected(selected);

    row.col(|ui| {
        let mut checked = selected;
        toggled = ui.add(Checkbox::without_text(&mut checked)).changed();
    });

    for column in columns {
        let content = column.cell(record);
        row.col(|ui| render_cell(ui, &content, avatar_size));
    }

    toggled
}
