//! Row records and the static dataset they come from.

use std::{any::Any, borrow::Cow, collections::HashSet, fmt};

use log::info;
use roster_states::State;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ustr::Ustr;

use crate::LoadError;

const BUNDLED_DATA: &str = include_str!("../data/table_data.json");

/// Row identifier, either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(serde_json::Number),
    Text(String),
}

impl RowId {
    /// Stringified id, used as the selection key.
    pub fn key(&self) -> Ustr {
        Ustr::from(&self.to_string())
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RowId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One row: the typed fields every row carries plus whatever else the
/// document holds, keyed by column key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub id: RowId,
    pub name: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RowRecord {
    pub fn new(id: impl Into<RowId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn key(&self) -> Ustr {
        self.id.key()
    }

    /// Value of the field named by a column key. JSON `null` counts as absent.
    pub fn field(&self, key: &str) -> Option<Cow<'_, Value>> {
        match key {
            "id" => Some(Cow::Owned(self.id.to_value())),
            "name" => Some(Cow::Owned(Value::String(self.name.clone()))),
            "role" => Some(Cow::Owned(Value::String(self.role.clone()))),
            _ => self
                .extra
                .get(key)
                .filter(|value| !value.is_null())
                .map(Cow::Borrowed),
        }
    }
}

/// Static dataset input, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<RowRecord>,
}

impl Dataset {
    /// Builds a dataset, rejecting duplicate row ids.
    pub fn from_rows(rows: Vec<RowRecord>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.key()) {
                return Err(LoadError::DuplicateRowId {
                    id: row.id.to_string(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let rows: Vec<RowRecord> =
            serde_json::from_str(json).map_err(|err| LoadError::parse("table data", err))?;
        let dataset = Self::from_rows(rows)?;
        info!("Loaded dataset with {} rows", dataset.len());
        Ok(dataset)
    }

    /// The dataset shipped with the app.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(BUNDLED_DATA)
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&RowRecord> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct roles in first-seen order.
    pub fn role_options(&self) -> Vec<Ustr> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|row| Ustr::from(&row.role))
            .filter(|role| seen.insert(*role))
            .collect()
    }
}

impl State for Dataset {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_and_text_ids_stringify() {
        let dataset = Dataset::from_json(
            r#"[
                {"id": 1, "name": "Ann", "role": "admin"},
                {"id": "u-2", "name": "Bo", "role": "user"}
            ]"#,
        )
        .expect("valid dataset");

        let keys: Vec<Ustr> = dataset.rows().iter().map(RowRecord::key).collect();
        assert_eq!(keys, vec![Ustr::from("1"), Ustr::from("u-2")]);
    }

    #[test]
    fn extra_fields_resolve_by_key() {
        let row: RowRecord = serde_json::from_value(json!({
            "id": 3,
            "name": "Chen",
            "role": "editor",
            "tags": ["a", "b"],
            "nickname": null
        }))
        .expect("valid row");

        assert_eq!(row.field("tags").as_deref(), Some(&json!(["a", "b"])));
        assert_eq!(row.field("name").as_deref(), Some(&json!("Chen")));
        assert_eq!(row.field("id").as_deref(), Some(&json!(3)));
        assert!(row.field("nickname").is_none(), "null is absent");
        assert!(row.field("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Dataset::from_rows(vec![
            RowRecord::new(7, "Ann", "admin"),
            RowRecord::new(7, "Bo", "user"),
        ])
        .expect_err("ids collide");

        assert!(matches!(err, LoadError::DuplicateRowId { ref id } if id == "7"));
    }

    #[test]
    fn role_options_are_distinct_in_first_seen_order() {
        let dataset = Dataset::from_rows(vec![
            RowRecord::new(1, "Ann", "user"),
            RowRecord::new(2, "Bo", "admin"),
            RowRecord::new(3, "Cy", "user"),
        ])
        .expect("unique ids");

        assert_eq!(
            dataset.role_options(),
            vec![Ustr::from("user"), Ustr::from("admin")]
        );
    }

    #[test]
    fn bundled_dataset_loads() {
        let dataset = Dataset::bundled().expect("bundled data is valid");
        assert!(!dataset.is_empty());
    }
}
