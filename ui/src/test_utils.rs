use egui_kittest::Harness;
use roster_business::{
    ColumnDescriptor, ColumnKind, Dataset, LoadError, LoadStatus, RowRecord, TableConfig,
    TableSchema,
};
use serde_json::json;

use crate::state::State;

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Seven people over two pages, no avatar column.
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self {
            harness: Harness::new_ui_state(app, sample_state()),
        }
    }

    /// A state whose data failed to load.
    pub fn failed(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let mut state = State::with_data(
            TableSchema::default(),
            Dataset::default(),
            TableConfig::default(),
        );
        let err = LoadError::DuplicateRowId { id: "1".to_owned() };
        state.ctx.add_state(LoadStatus::failed(&err));

        Self {
            harness: Harness::new_ui_state(app, state),
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }
}

pub fn sample_state() -> State {
    let schema = TableSchema::new(vec![
        ColumnDescriptor::new("name", "Name", ColumnKind::Text),
        ColumnDescriptor::new("role", "Role", ColumnKind::Badge),
        ColumnDescriptor::new("tags", "Tags", ColumnKind::Tags),
    ]);
    let rows = vec![
        RowRecord::new(1, "Ann", "admin").with_field("tags", json!(["ops", "billing"])),
        RowRecord::new(2, "Bo", "user").with_field("tags", json!(["design"])),
        RowRecord::new(3, "Joanna", "editor"),
        RowRecord::new(4, "Jon", "user").with_field("tags", json!([])),
        RowRecord::new(5, "Anton", "admin").with_field("tags", json!(["security"])),
        RowRecord::new(6, "Maja", "viewer"),
        RowRecord::new(7, "Johan", "user").with_field("tags", json!(["support"])),
    ];
    let dataset = Dataset::from_rows(rows).expect("sample ids are unique");

    State::with_data(schema, dataset, TableConfig::default())
}
