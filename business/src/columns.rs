//! Column mapper: schema descriptors to renderable column definitions.

use std::any::Any;

use log::warn;
use roster_states::{Compute, ComputeDeps, ComputeStage, Dep, Reg, Updater, assign_impl};
use serde_json::Value;
use ustr::Ustr;

use crate::{ColumnDescriptor, ColumnKind, RowRecord, TableSchema};

/// What a single cell should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Field missing on the row.
    Blank,
    Text(String),
    /// Circular avatar; `None` draws the placeholder.
    Avatar(Option<String>),
    Badge(String),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: Ustr,
    pub header: String,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub fn cell(&self, row: &RowRecord) -> CellContent {
        let value = row.field(&self.key);
        render_value(self.kind, value.as_deref())
    }
}

impl From<&ColumnDescriptor> for ColumnDef {
    fn from(descriptor: &ColumnDescriptor) -> Self {
        Self {
            key: Ustr::from(&descriptor.key),
            header: descriptor.label.clone(),
            kind: descriptor.kind,
        }
    }
}

/// One column per descriptor, in schema order.
pub fn map_columns(descriptors: &[ColumnDescriptor]) -> Vec<ColumnDef> {
    descriptors.iter().map(ColumnDef::from).collect()
}

pub fn render_value(kind: ColumnKind, value: Option<&Value>) -> CellContent {
    match kind {
        ColumnKind::Image => CellContent::Avatar(value.map(display_text)),
        ColumnKind::Badge => match value {
            Some(value) => CellContent::Badge(display_text(value)),
            None => CellContent::Blank,
        },
        ColumnKind::Tags => CellContent::Tags(match value {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| !item.is_null())
                .map(display_text)
                .collect(),
            Some(single) => vec![display_text(single)],
            None => Vec::new(),
        }),
        ColumnKind::Text => match value {
            Some(value) => CellContent::Text(display_text(value)),
            None => CellContent::Blank,
        },
    }
}

/// Plain text for a JSON value; strings lose their quotes.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Column definitions derived from the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableColumns {
    columns: Vec<ColumnDef>,
}

impl TableColumns {
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn find(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.key.as_str() == key)
    }
}

impl Compute for TableColumns {
    fn deps(&self) -> ComputeDeps {
        (vec![Reg::of::<TableSchema>()], vec![])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        match deps.state::<TableSchema>() {
            Ok(schema) => updater.set(Self {
                columns: map_columns(schema.columns()),
            }),
            Err(err) => warn!("Cannot map columns: {err}"),
        }
        ComputeStage::Finished
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
