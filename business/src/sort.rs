//! Client-side column sorting.

use std::{any::Any, cmp::Ordering};

use log::{debug, warn};
use roster_states::{
    Compute, ComputeDeps, ComputeStage, Dep, Reg, State, Updater, assign_impl,
};
use serde_json::Value;
use ustr::Ustr;

use crate::{Dataset, FilteredRows, RowRecord, columns::display_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active sort column. `None` keeps the filtered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<Ustr>,
    direction: SortDirection,
}

impl SortState {
    pub fn by(column: Ustr, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    pub fn column(&self) -> Option<Ustr> {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction for `column` if it is the sorted one.
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        match self.column {
            Some(active) if active.as_str() == column => Some(self.direction),
            _ => None,
        }
    }

    /// Header click: unsorted, then ascending, then descending, then unsorted.
    pub fn cycle(&mut self, column: Ustr) {
        *self = match (self.column, self.direction) {
            (Some(active), SortDirection::Ascending) if active == column => {
                Self::by(column, SortDirection::Descending)
            }
            (Some(active), SortDirection::Descending) if active == column => Self::default(),
            _ => Self::by(column, SortDirection::Ascending),
        };
        debug!("Sort is now {self:?}");
    }
}

impl State for SortState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Numbers compare numerically, booleans false first, everything else by
/// case-insensitive text.
pub fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => display_text(left)
            .to_lowercase()
            .cmp(&display_text(right).to_lowercase()),
    }
}

/// Stable sort of dataset indices by the field under `key`.
///
/// Rows missing the field go last in both directions.
pub fn sort_rows(rows: &[RowRecord], indices: &mut [usize], key: &str, direction: SortDirection) {
    let field = |index: usize| rows.get(index).and_then(|row| row.field(key));

    indices.sort_by(|a, b| match (field(*a).as_deref(), field(*b).as_deref()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => {
            let ordering = compare_values(left, right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    });
}

/// Filtered rows in display order, ready to paginate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRows {
    indices: Vec<usize>,
}

impl TableRows {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Compute for TableRows {
    fn deps(&self) -> ComputeDeps {
        (
            vec![Reg::of::<Dataset>(), Reg::of::<SortState>()],
            vec![Reg::of::<FilteredRows>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        let inputs = (
            deps.state::<Dataset>(),
            deps.state::<SortState>(),
            deps.compute::<FilteredRows>(),
        );
        let (dataset, sort, filtered) = match inputs {
            (Ok(dataset), Ok(sort), Ok(filtered)) => (dataset, sort, filtered),
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                warn!("Cannot order rows: {err}");
                return ComputeStage::Finished;
            }
        };

        let mut indices = filtered.indices().to_vec();
        if let Some(column) = sort.column() {
            sort_rows(dataset.rows(), &mut indices, &column, sort.direction());
        }
        updater.set(Self { indices });
        ComputeStage::Finished
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
