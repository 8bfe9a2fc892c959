/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use serde_json::Value;

use crate::table::{ResultRow, ResultSet};

lazy_static! {
    static ref NAN_VALUE: Regex = Regex::new(r":\s*NaN").unwrap();
    static ref NAN_AFTER_COMMA: Regex = Regex::new(r",\s*NaN").unwrap();
    static ref NAN_ARRAY_START: Regex = Regex::new(r"\[\s*NaN").unwrap();
    static ref NAN_ARRAY_END: Regex = Regex::new(r"NaN\s*\]").unwrap();
    static ref NAN_BEFORE_COMMA: Regex = Regex::new(r"NaN\s*,").unwrap();
}

/// Rewrite the backend's literal `NaN` tokens to `null` in every
/// syntactic position. The catalog service serializes unmeasured floats
/// as `NaN`, which is not valid JSON; this textual pass is part of the
/// wire contract and must run before any structured decode.
pub fn repair_nan(payload: &str) -> String {
    let payload = NAN_VALUE.replace_all(payload, ": null");
    let payload = NAN_AFTER_COMMA.replace_all(&payload, ", null");
    let payload = NAN_ARRAY_START.replace_all(&payload, "[null");
    let payload = NAN_ARRAY_END.replace_all(&payload, "null]");
    NAN_BEFORE_COMMA.replace_all(&payload, "null,").into_owned()
}

/// Normalize a raw `/api/tools/adtn-catalog/data` body into a result
/// table. The body may be a JSON array of rows, a single row object, a
/// JSON document nested in a string, invalid JSON carrying `NaN` tokens,
/// or empty; every malformed shape degrades to zero rows. The columns
/// of the submitted query are bound to the table regardless, so headers
/// can still render.
pub fn normalize(body: &str, columns: &[String]) -> ResultSet {
    let rows = match serde_json::from_str(body) {
        Ok(Value::String(document)) => decode_rows(&repair_nan(&document)),
        Ok(value) => rows_from_value(value),
        // not valid JSON as served; repair and try again
        Err(_) => decode_rows(&repair_nan(body)),
    };
    ResultSet {
        columns: columns.to_vec(),
        rows,
    }
}

fn decode_rows(document: &str) -> Vec<ResultRow> {
    match serde_json::from_str(document) {
        Ok(value) => rows_from_value(value),
        Err(e) => {
            warn!("discarding unparseable catalog response: {e}");
            Vec::new()
        }
    }
}

fn rows_from_value(value: Value) -> Vec<ResultRow> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| {
                serde_json::from_value(item)
                    .map_err(|e| debug!("skipping malformed row: {e}"))
                    .ok()
            })
            .collect(),
        Value::Null => Vec::new(),
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(|row| vec![row])
            .unwrap_or_default(),
        other => {
            warn!("unexpected catalog response shape: {other}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::repair_nan;

    #[test]
    fn repairs_nan_in_all_positions() {
        assert_eq!(repair_nan(r#"{"P0": NaN}"#), r#"{"P0": null}"#);
        assert_eq!(repair_nan(r#"{"P0":NaN}"#), r#"{"P0": null}"#);
        assert_eq!(repair_nan("[NaN, 1]"), "[null, 1]");
        assert_eq!(repair_nan("[1, NaN]"), "[1, null]");
        assert_eq!(repair_nan("[NaN]"), "[null]");
        assert_eq!(repair_nan("[NaN , 1]"), "[null , 1]");
    }

    #[test]
    fn leaves_valid_documents_alone() {
        let document = r#"[{"JNAME": "J0534+2200", "P0": 0.033}]"#;
        assert_eq!(repair_nan(document), document);
    }
}
