mod pagination;
mod panel;
mod search;
mod selection_summary;
pub mod table;

pub use pagination::pagination_bar;
pub use panel::information_table_panel;
pub use search::{name_search_field, role_filter};
pub use selection_summary::selection_summary;
pub use table::{TableAction, current_page_ids, information_table};
