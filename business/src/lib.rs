mod columns;
mod config;
mod dataset;
mod debounce;
mod error;
mod filter;
mod pagination;
mod schema;
mod search;
mod selection;
mod sort;
mod table;

pub use columns::{CellContent, ColumnDef, TableColumns, display_text, map_columns, render_value};
pub use config::TableConfig;
pub use dataset::{Dataset, RowId, RowRecord};
pub use debounce::Debouncer;
pub use error::LoadError;
pub use filter::{ALL_ROLES, FilterState, FilteredRows, RoleOption, RoleOptions, filter_rows};
pub use pagination::Pagination;
pub use schema::{ColumnDescriptor, ColumnKind, TableSchema};
pub use search::{NameSearch, commit_name_search};
pub use selection::SelectionState;
pub use sort::{SortDirection, SortState, TableRows, compare_values, sort_rows};
pub use table::{LoadStatus, register, register_bundled};
