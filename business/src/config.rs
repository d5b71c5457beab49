use std::any::Any;

use bon::Builder;
use chrono::Duration;
use roster_states::State;

pub(crate) const DEFAULT_SEARCH_QUIET_MS: i64 = 1000;

/// Tunables of the information table.
///
/// Defaults reproduce the stock behavior: five rows per page starting on the
/// first page, and a one second quiet period before a search is applied.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct TableConfig {
    #[builder(default = 5)]
    pub page_size: usize,
    #[builder(default = vec![5, 10, 20, 50])]
    pub page_size_options: Vec<usize>,
    #[builder(default = Duration::milliseconds(DEFAULT_SEARCH_QUIET_MS))]
    pub search_quiet_period: Duration,
    #[builder(default = 28.0)]
    pub avatar_size: f32,
    #[builder(default = 36.0)]
    pub row_height: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl State for TableConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
