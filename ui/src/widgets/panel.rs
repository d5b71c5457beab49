//! The information table panel: toolbar, table, pagination and the
//! selected-rows summary.

use egui::{Response, Ui};
use log::warn;
use roster_business::{LoadStatus, NameSearch, Pagination, TableRows, commit_name_search};
use roster_states::{StateCtx, Time};

use super::{
    information_table, name_search_field, pagination_bar, role_filter, selection_summary,
};
use crate::utils::colors::COLOR_RED;

pub fn information_table_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        if let Some(error) = state_ctx.state::<LoadStatus>().error() {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
            return;
        }

        commit_name_search(state_ctx);
        schedule_search_commit(state_ctx, ui);

        ui.horizontal(|ui| {
            name_search_field(state_ctx, ui);
            role_filter(state_ctx, ui);
        });
        refresh(state_ctx);

        ui.add_space(8.0);
        information_table(state_ctx, ui);
        refresh(state_ctx);

        pagination_bar(state_ctx, ui);
        ui.add_space(8.0);
        selection_summary(state_ctx, ui);
    })
    .response
}

/// Wakes the UI when a pending search is due, so it applies without input.
fn schedule_search_commit(state_ctx: &StateCtx, ui: &Ui) {
    let now = *state_ctx.state::<Time>().as_ref();
    if let Some(remaining) = state_ctx.state::<NameSearch>().remaining(now) {
        ui.ctx()
            .request_repaint_after(remaining.to_std().unwrap_or_default());
    }
}

/// Re-runs dirty computes and keeps the page index inside the row count.
fn refresh(state_ctx: &mut StateCtx) {
    if let Err(err) = state_ctx.run_all_dirty() {
        warn!("Failed to refresh the table: {err}");
    }
    let total = state_ctx.cached::<TableRows>().map_or(0, TableRows::len);
    state_ctx.update::<Pagination>(|pagination| {
        pagination.clamp(total);
    });
}
