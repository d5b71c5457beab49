//! Pagination bar under the table.

use egui::{Button, ComboBox, Ui};
use roster_business::{Pagination, TableConfig, TableRows};
use roster_states::StateCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    Previous,
    Next,
    Resize(usize),
}

pub fn pagination_bar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let total = state_ctx.cached::<TableRows>().map_or(0, TableRows::len);
    let pagination = *state_ctx.state::<Pagination>();
    let options = &state_ctx.state::<TableConfig>().page_size_options;
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label("Rows per page");
        let mut page_size = pagination.page_size();
        ComboBox::from_id_salt("rows_per_page")
            .selected_text(page_size.to_string())
            .show_ui(ui, |ui| {
                for &option in options {
                    if ui
                        .selectable_value(&mut page_size, option, option.to_string())
                        .changed()
                    {
                        action = Some(PageAction::Resize(option));
                    }
                }
            });

        let range = pagination.page_range(total);
        if range.is_empty() {
            ui.label(format!("0-0 of {total}"));
        } else {
            ui.label(format!("{}-{} of {total}", range.start + 1, range.end));
        }
        ui.label(format!(
            "Page {} of {}",
            pagination.page_index() + 1,
            pagination.page_count(total)
        ));

        if ui
            .add_enabled(!pagination.is_first(), Button::new("Previous"))
            .clicked()
        {
            action = Some(PageAction::Previous);
        }
        if ui
            .add_enabled(!pagination.is_last(total), Button::new("Next"))
            .clicked()
        {
            action = Some(PageAction::Next);
        }
    });

    match action {
        Some(PageAction::Previous) => state_ctx.update::<Pagination>(Pagination::previous_page),
        Some(PageAction::Next) => state_ctx.update::<Pagination>(|p| p.next_page(total)),
        Some(PageAction::Resize(size)) => state_ctx.update::<Pagination>(|p| p.set_page_size(size)),
        None => {}
    }
}
