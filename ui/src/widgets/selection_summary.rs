//! List of selected row ids under the table.

use egui::Ui;
use roster_business::SelectionState;
use roster_states::StateCtx;

pub fn selection_summary(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let selection = state_ctx.state::<SelectionState>();
    let mut clear = false;

    ui.heading("Selected Rows:");
    if selection.is_empty() {
        ui.label("No rows selected.");
    } else {
        for id in selection.summary() {
            ui.label(format!("• {id}"));
        }
        clear = ui.button("Clear selection").clicked();
    }

    if clear {
        state_ctx.update::<SelectionState>(SelectionState::clear);
    }
}
