//! Installs everything the information table needs into a [`StateCtx`].

use std::any::Any;

use log::{error, info, warn};
use roster_states::{State, StateCtx, Time};

use crate::{
    Dataset, FilterState, FilteredRows, LoadError, NameSearch, Pagination, RoleOptions,
    SelectionState, SortState, TableColumns, TableConfig, TableRows, TableSchema,
};

/// Outcome of loading the table inputs. Holds the error text shown in place
/// of the table when loading failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStatus {
    error: Option<String>,
}

impl LoadStatus {
    pub fn failed(err: &LoadError) -> Self {
        Self {
            error: Some(err.to_string()),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.error.is_none()
    }
}

impl State for LoadStatus {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Adds the inputs, the interaction states and the derived computes.
///
/// Filter, search, selection, sort and pagination start empty.
pub fn register(ctx: &mut StateCtx, schema: TableSchema, dataset: Dataset, config: TableConfig) {
    ctx.add_state(Time::default());
    ctx.add_state(LoadStatus::default());
    ctx.add_state(FilterState::default());
    ctx.add_state(NameSearch::new(config.search_quiet_period));
    ctx.add_state(SelectionState::default());
    ctx.add_state(SortState::default());
    ctx.add_state(Pagination::new(config.page_size));
    ctx.add_state(config);
    ctx.add_state(schema);
    ctx.add_state(dataset);

    ctx.record_compute(TableColumns::default());
    ctx.record_compute(RoleOptions::default());
    ctx.record_compute(FilteredRows::default());
    ctx.record_compute(TableRows::default());

    if let Err(err) = ctx.verify_deps() {
        warn!("Table computes cannot be ordered: {err}");
    }
}

/// Like [`register`] with the bundled schema and dataset.
///
/// A load failure leaves an empty table and records the error in
/// [`LoadStatus`].
pub fn register_bundled(ctx: &mut StateCtx, config: TableConfig) {
    match TableSchema::bundled().and_then(|schema| Ok((schema, Dataset::bundled()?))) {
        Ok((schema, dataset)) => {
            info!("Bundled table data ready");
            register(ctx, schema, dataset, config);
        }
        Err(err) => {
            error!("Failed to load bundled table data: {err}");
            register(ctx, TableSchema::default(), Dataset::default(), config);
            ctx.add_state(LoadStatus::failed(&err));
        }
    }
}
