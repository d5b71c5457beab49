//! Table view of the current page.
//!
//! - `columns`: column widths
//! - `header`: page checkbox and sortable titles
//! - `row`: one record per row, highlighted when selected
//! - `cells`: per-type cell renderers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{
    Dataset, Pagination, RowRecord, SelectionState, SortState, TableColumns, TableConfig,
    TableRows,
};
use roster_states::StateCtx;
use ustr::Ustr;

use columns::{HEADER_HEIGHT, table_columns};
use header::render_table_header;
use row::render_row;

/// Something the user did inside the table, applied once rendering is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    ToggleRow(Ustr),
    /// Tick or untick every row of the current page.
    SelectPage(bool),
    Sort(Ustr),
}

/// Renders the current page of [`TableRows`] and applies the clicks.
pub fn information_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let (actions, page_ids) = render_table(state_ctx, ui);
    for action in actions {
        apply_action(state_ctx, action, &page_ids);
    }
}

/// Ids of the rows on the current page, in display order.
pub fn current_page_ids(state_ctx: &StateCtx) -> Vec<Ustr> {
    page_records(state_ctx).iter().map(|record| record.key()).collect()
}

fn page_records(state_ctx: &StateCtx) -> Vec<&RowRecord> {
    let Some(rows) = state_ctx.cached::<TableRows>() else {
        return Vec::new();
    };
    let dataset = state_ctx.state::<Dataset>();
    let range = state_ctx.state::<Pagination>().page_range(rows.len());

    rows.indices()[range]
        .iter()
        .filter_map(|&index| dataset.get(index))
        .collect()
}

fn render_table(state_ctx: &StateCtx, ui: &mut Ui) -> (Vec<TableAction>, Vec<Ustr>) {
    let Some(columns) = state_ctx.cached::<TableColumns>() else {
        return (Vec::new(), Vec::new());
    };
    let columns = columns.columns();
    let selection = state_ctx.state::<SelectionState>();
    let sort = state_ctx.state::<SortState>();
    let config = state_ctx.state::<TableConfig>();

    let page = page_records(state_ctx);
    let page_ids: Vec<Ustr> = page.iter().map(|record| record.key()).collect();
    let mut actions = Vec::new();

    let mut builder = TableBuilder::new(ui)
        .id_salt("information_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns(columns, config.avatar_size) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            let page_selected = selection.all_selected(&page_ids);
            actions.extend(render_table_header(
                &mut header,
                columns,
                sort,
                page_selected,
                page_ids.len(),
            ));
        })
        .body(|mut body| {
            for record in &page {
                body.row(config.row_height, |mut row| {
                    let selected = selection.is_selected(&record.key());
                    if render_row(&mut row, record, columns, selected, config.avatar_size) {
                        actions.push(TableAction::ToggleRow(record.key()));
                    }
                });
            }
        });

    if page.is_empty() {
        ui.label("No records to display.");
    }

    (actions, page_ids)
}

fn apply_action(state_ctx: &mut StateCtx, action: TableAction, page_ids: &[Ustr]) {
    match action {
        TableAction::ToggleRow(id) => state_ctx.update::<SelectionState>(|selection| {
            selection.toggle(id);
        }),
        TableAction::SelectPage(true) => state_ctx
            .update::<SelectionState>(|selection| selection.select_all(page_ids.iter().copied())),
        TableAction::SelectPage(false) => state_ctx.update::<SelectionState>(|selection| {
            selection.deselect_all(page_ids.iter().copied());
        }),
        TableAction::Sort(column) => {
            state_ctx.update::<SortState>(|sort| sort.cycle(column));
            state_ctx.update::<Pagination>(Pagination::first_page);
        }
    }
}
