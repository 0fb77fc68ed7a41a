//! Database create and row payloads.

use std::collections::HashMap;

use indexmap::IndexMap;
use nb_renderer::{Icon, LineText};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::ParamsError;
use crate::page::{Parent, ParamsBuilder, icon};

/// Property type of the first column.
pub const TITLE: &str = "title";
/// Property type of every other column unless overridden.
pub const RICH_TEXT: &str = "rich_text";

/// Property name to schema or value, serialized in column order.
pub type Properties = IndexMap<String, Value>;

/// Payload for creating a database under a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabase {
    pub parent: Parent,
    pub title: LineText,
    pub properties: Properties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Payload for creating one database row (a page under the database).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabaseRow {
    pub parent: Parent,
    pub properties: Properties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Property types for `columns`: the first is always [`TITLE`], the rest use
/// `overrides` and fall back to [`RICH_TEXT`].
fn column_types<'a>(
    columns: impl IntoIterator<Item = &'a str>,
    overrides: Option<&'a HashMap<String, String>>,
) -> Vec<(&'a str, &'a str)> {
    columns
        .into_iter()
        .enumerate()
        .map(|(idx, column)| {
            let kind = if idx == 0 {
                TITLE
            } else {
                overrides
                    .and_then(|types| types.get(column))
                    .map(String::as_str)
                    .filter(|kind| !kind.is_empty())
                    .unwrap_or(RICH_TEXT)
            };
            (column, kind)
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl ParamsBuilder {
    /// Payload for a database whose properties are `columns`.
    pub fn create_database(
        &self,
        page_id: &str,
        title: &str,
        columns: &[String],
        overrides: Option<&HashMap<String, String>>,
        emoji: Option<&str>,
    ) -> Result<CreateDatabase, ParamsError> {
        let properties = column_types(columns.iter().map(String::as_str), overrides)
            .into_iter()
            .map(|(column, kind)| {
                let schema = Map::from_iter([(kind.to_owned(), json!({}))]);
                (column.to_owned(), Value::Object(schema))
            })
            .collect();
        Ok(CreateDatabase {
            parent: Parent::page(page_id),
            title: self.title(title)?,
            properties,
            icon: icon(emoji),
        })
    }

    /// Payload for a database row.
    ///
    /// `row` holds `(column, value)` pairs; `columns` selects and orders the
    /// written columns and defaults to the row's own order. Title and rich
    /// text values are stringified; other property types pass through as-is.
    pub fn create_database_row(
        &self,
        database_id: &str,
        row: &[(String, Value)],
        columns: Option<&[String]>,
        overrides: Option<&HashMap<String, String>>,
        emoji: Option<&str>,
    ) -> Result<CreateDatabaseRow, ParamsError> {
        let names: Vec<&str> = match columns {
            Some(columns) => columns.iter().map(String::as_str).collect(),
            None => row.iter().map(|(column, _)| column.as_str()).collect(),
        };

        let mut properties = Properties::with_capacity(names.len());
        for (column, kind) in column_types(names, overrides) {
            let value = row
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| value)
                .ok_or_else(|| ParamsError::MissingColumn(column.to_owned()))?;
            let value = if kind == TITLE || kind == RICH_TEXT {
                json!([{"text": {"content": cell_text(value)}}])
            } else {
                value.clone()
            };
            let mut property = Map::new();
            property.insert("type".to_owned(), Value::String(kind.to_owned()));
            property.insert(kind.to_owned(), value);
            properties.insert(column.to_owned(), Value::Object(property));
        }

        Ok(CreateDatabaseRow {
            parent: Parent::database(database_id),
            properties,
            icon: icon(emoji),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn columns() -> Vec<String> {
        vec!["k".to_owned(), "v1".to_owned(), "v2".to_owned()]
    }

    fn row() -> Vec<(String, Value)> {
        vec![
            ("k".to_owned(), json!(1)),
            ("v1".to_owned(), json!("a")),
            ("v2".to_owned(), json!(10)),
        ]
    }

    #[test]
    fn test_create_database() {
        let params = ParamsBuilder::new()
            .create_database("abc", "title text", &columns(), None, Some("X"))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "parent": {"type": "page_id", "page_id": "abc"},
                "title": [{"text": {"content": "title text"}}],
                "properties": {
                    "k": {"title": {}},
                    "v1": {"rich_text": {}},
                    "v2": {"rich_text": {}}
                },
                "icon": {"emoji": "X"}
            })
        );
    }

    #[test]
    fn test_create_database_column_types() {
        let overrides = HashMap::from([
            ("v2".to_owned(), "number".to_owned()),
            ("k".to_owned(), "number".to_owned()),
        ]);
        let params = ParamsBuilder::new()
            .create_database("abc", "t", &columns(), Some(&overrides), None)
            .unwrap();
        assert_eq!(params.properties.get("k"), Some(&json!({"title": {}})));
        assert_eq!(params.properties.get("v2"), Some(&json!({"number": {}})));
        assert_eq!(params.icon, None);
    }

    #[test]
    fn test_properties_keep_column_order() {
        let params = ParamsBuilder::new()
            .create_database("abc", "t", &["z".to_owned(), "a".to_owned()], None, None)
            .unwrap();
        let text = serde_json::to_string(&params.properties).unwrap();
        assert_eq!(text, r#"{"z":{"title":{}},"a":{"rich_text":{}}}"#);
    }

    #[test]
    fn test_repeated_column_keeps_one_property() {
        let columns = vec!["k".to_owned(), "v".to_owned(), "v".to_owned()];
        let params = ParamsBuilder::new()
            .create_database("abc", "t", &columns, None, None)
            .unwrap();
        let text = serde_json::to_string(&params.properties).unwrap();
        assert_eq!(text, r#"{"k":{"title":{}},"v":{"rich_text":{}}}"#);
    }

    #[test]
    fn test_create_database_row() {
        let params = ParamsBuilder::new()
            .create_database_row("abc", &row(), None, None, Some("X"))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "parent": {"type": "database_id", "database_id": "abc"},
                "properties": {
                    "k": {"type": "title", "title": [{"text": {"content": "1"}}]},
                    "v1": {"type": "rich_text", "rich_text": [{"text": {"content": "a"}}]},
                    "v2": {"type": "rich_text", "rich_text": [{"text": {"content": "10"}}]}
                },
                "icon": {"emoji": "X"}
            })
        );
    }

    #[test]
    fn test_create_database_row_raw_values() {
        let overrides = HashMap::from([("v2".to_owned(), "number".to_owned())]);
        let params = ParamsBuilder::new()
            .create_database_row("abc", &row(), None, Some(&overrides), None)
            .unwrap();
        assert_eq!(
            params.properties.get("v2"),
            Some(&json!({"type": "number", "number": 10}))
        );
    }

    #[test]
    fn test_create_database_row_selected_columns() {
        let selected = vec!["v1".to_owned(), "k".to_owned()];
        let params = ParamsBuilder::new()
            .create_database_row("abc", &row(), Some(&selected), None, None)
            .unwrap();
        assert_eq!(params.properties.len(), 2);
        assert_eq!(
            params.properties.get("v1"),
            Some(&json!({"type": "title", "title": [{"text": {"content": "a"}}]}))
        );
    }

    #[test]
    fn test_create_database_row_missing_column() {
        let selected = vec!["nope".to_owned()];
        let err = ParamsBuilder::new()
            .create_database_row("abc", &row(), Some(&selected), None, None)
            .unwrap_err();
        assert!(matches!(err, ParamsError::MissingColumn(ref c) if c == "nope"));
    }
}
