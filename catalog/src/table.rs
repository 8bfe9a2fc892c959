/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::IDENTIFIER_PARAM;

/// A single catalog table cell. The backend leaves gaps in the catalog
/// (unmeasured parameters), which arrive as `null` after the repair pass
/// and are kept as an explicit missing marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Missing,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "N/A"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One result record, keyed by the parameter names of the query that
/// produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow(HashMap<String, CellValue>);

impl ResultRow {
    pub fn new(cells: HashMap<String, CellValue>) -> Self {
        Self(cells)
    }

    /// Cell for the given column; absent cells count as missing.
    pub fn get(&self, column: &str) -> &CellValue {
        self.0.get(column).unwrap_or(&CellValue::Missing)
    }

    /// The row's identifier value, if present and textual.
    pub fn identifier(&self) -> Option<&str> {
        match self.get(IDENTIFIER_PARAM) {
            CellValue::Text(name) => Some(name),
            _ => None,
        }
    }
}

impl FromIterator<(String, CellValue)> for ResultRow {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(
        iter: T,
    ) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The normalized result table: the columns of the query that produced
/// it plus the rows in backend order. Replaced wholesale on every query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, ResultRow};

    #[test]
    fn cells_decode_by_shape() {
        let row: ResultRow = serde_json::from_str(
            r#"{"JNAME": "J0534+2200", "P0": 0.033, "NGLT": 30,
                "BINARY": null}"#,
        )
        .unwrap();
        assert_eq!(
            row.get("JNAME"),
            &CellValue::Text("J0534+2200".to_string())
        );
        assert_eq!(row.get("P0"), &CellValue::Float(0.033));
        assert_eq!(row.get("NGLT"), &CellValue::Integer(30));
        assert_eq!(row.get("BINARY"), &CellValue::Missing);
    }

    #[test]
    fn absent_column_counts_as_missing() {
        let row = ResultRow::default();
        assert_eq!(row.get("DM"), &CellValue::Missing);
        assert_eq!(row.get("DM").to_string(), "N/A");
    }

    #[test]
    fn identifier_requires_text() {
        let row: ResultRow =
            serde_json::from_str(r#"{"JNAME": "J1939+2134"}"#).unwrap();
        assert_eq!(row.identifier(), Some("J1939+2134"));

        let row: ResultRow = serde_json::from_str(r#"{"JNAME": null}"#).unwrap();
        assert_eq!(row.identifier(), None);
    }
}
