use chrono::Utc;
use egui::ScrollArea;
use roster_states::Time;

use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state
            .ctx
            .update::<Time>(|time| *time.as_mut() = Utc::now());
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Information Table");
            ui.add_space(10.0);
            ScrollArea::vertical().show(ui, |ui| {
                widgets::information_table_panel(&mut self.state.ctx, ui);
            });
        });
    }
}
