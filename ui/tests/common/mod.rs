use egui_kittest::Harness;
use roster_business::{ColumnDescriptor, ColumnKind, Dataset, RowRecord, TableConfig, TableSchema};
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::json;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_config(TableConfig::default(), app)
    }

    #[allow(unused)]
    pub fn with_config(
        config: TableConfig,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        Self {
            harness: Harness::new_ui_state(app, team_state(config)),
        }
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        let app = RosterApp::new(team_state(TableConfig::default()));
        Self {
            harness: Harness::new_eframe(|_| app),
        }
    }
}

/// Eight people with ids 10..=17 and no avatar column.
pub fn team_state(config: TableConfig) -> State {
    let schema = TableSchema::new(vec![
        ColumnDescriptor::new("name", "Name", ColumnKind::Text),
        ColumnDescriptor::new("email", "Email", ColumnKind::Text),
        ColumnDescriptor::new("role", "Role", ColumnKind::Badge),
        ColumnDescriptor::new("tags", "Tags", ColumnKind::Tags),
    ]);
    let people = [
        (10, "Ingrid", "Admin"),
        (11, "Karl", "User"),
        (12, "Lena", "Editor"),
        (13, "Mats", "User"),
        (14, "Nora", "Viewer"),
        (15, "Oskar", "Admin"),
        (16, "Petra", "User"),
        (17, "Rune", "Editor"),
    ];
    let rows = people
        .into_iter()
        .map(|(id, name, role)| {
            RowRecord::new(id, name, role)
                .with_field("email", json!(format!("{}@team.test", name.to_lowercase())))
                .with_field("tags", json!([format!("team-{}", id % 3)]))
        })
        .collect();
    let dataset = Dataset::from_rows(rows).expect("ids are unique");

    State::with_data(schema, dataset, config)
}
