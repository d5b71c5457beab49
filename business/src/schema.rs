//! Column schema: the ordered `{key, label, type}` list driving the table.

use std::any::Any;

use log::info;
use roster_states::State;
use serde::{Deserialize, Serialize};

use crate::LoadError;

const BUNDLED_SCHEMA: &str = include_str!("../data/table_schema.json");

/// How a column's cells are rendered.
///
/// Unknown `type` strings fall back to [`ColumnKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Image,
    Badge,
    Tags,
    #[default]
    #[serde(other)]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Static schema input, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let columns: Vec<ColumnDescriptor> =
            serde_json::from_str(json).map_err(|err| LoadError::parse("table schema", err))?;
        info!("Loaded table schema with {} columns", columns.len());
        Ok(Self { columns })
    }

    /// The schema shipped with the app.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(BUNDLED_SCHEMA)
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }
}

impl State for TableSchema {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_types_and_keeps_order() {
        let schema = TableSchema::from_json(
            r#"[
                {"key": "avatar", "label": "Avatar", "type": "image"},
                {"key": "name", "label": "Name", "type": "text"},
                {"key": "role", "label": "Role", "type": "badge"},
                {"key": "tags", "label": "Tags", "type": "tags"}
            ]"#,
        )
        .expect("valid schema");

        let kinds: Vec<ColumnKind> = schema.columns().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Image,
                ColumnKind::Text,
                ColumnKind::Badge,
                ColumnKind::Tags
            ]
        );
        assert_eq!(schema.columns()[1].label, "Name");
    }

    #[test]
    fn unknown_or_missing_type_is_text() {
        let schema = TableSchema::from_json(
            r#"[
                {"key": "joined", "label": "Joined", "type": "date"},
                {"key": "email", "label": "Email"}
            ]"#,
        )
        .expect("valid schema");

        assert!(schema.columns().iter().all(|c| c.kind == ColumnKind::Text));
    }

    #[test]
    fn malformed_schema_names_the_document() {
        let err = TableSchema::from_json("{").expect_err("not a list");
        assert!(err.to_string().contains("table schema"));
    }

    #[test]
    fn bundled_schema_loads() {
        let schema = TableSchema::bundled().expect("bundled schema is valid");
        assert!(schema.columns().iter().any(|c| c.key == "name"));
    }
}
