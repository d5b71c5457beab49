//! Header row: page checkbox and sortable column titles.

use egui::{Button, Checkbox, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{ColumnDef, SortDirection, SortState};

use super::TableAction;

/// Renders the header and returns what the user clicked, if anything.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[ColumnDef],
    sort: &SortState,
    page_selected: bool,
    page_len: usize,
) -> Option<TableAction> {
    let mut action = None;

    header.col(|ui| {
        let mut checked = page_selected;
        let response = ui
            .add_enabled(page_len > 0, Checkbox::without_text(&mut checked))
            .on_hover_text("Select all rows on this page");
        if response.changed() {
            action = Some(TableAction::SelectPage(checked));
        }
    });

    for column in columns {
        header.col(|ui| {
            if render_sort_button(ui, &column.header, sort.direction_of(&column.key)) {
                action = Some(TableAction::Sort(column.key));
            }
        });
    }

    action
}

fn render_sort_button(ui: &mut Ui, label: &str, direction: Option<SortDirection>) -> bool {
    let text = match direction {
        Some(SortDirection::Ascending) => format!("{label} ⬆"),
        Some(SortDirection::Descending) => format!("{label} ⬇"),
        None => label.to_owned(),
    };
    ui.add(Button::new(RichText::new(text).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked()
}
