use roster_business::{Dataset, TableConfig, TableSchema, register, register_bundled};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for the table inputs, filters and computes.
    pub ctx: StateCtx,
}

impl Default for State {
    /// Loads the schema and dataset bundled with the app.
    fn default() -> Self {
        let mut ctx = StateCtx::new();
        register_bundled(&mut ctx, TableConfig::default());
        Self { ctx }
    }
}

impl State {
    pub fn with_data(schema: TableSchema, dataset: Dataset, config: TableConfig) -> Self {
        let mut ctx = StateCtx::new();
        register(&mut ctx, schema, dataset, config);
        Self { ctx }
    }
}
