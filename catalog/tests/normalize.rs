/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use catalog::response::normalize;
use catalog::{CellValue, ResultSet};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn array_body_is_used_directly() {
    let body = r#"[{"JNAME": "J0534+2200", "P0": 0.033},
                   {"JNAME": "J1939+2134", "P0": 0.00156}]"#;
    let results = normalize(body, &columns(&["JNAME", "P0"]));
    assert_eq!(results.rows.len(), 2);
    assert_eq!(results.rows[0].identifier(), Some("J0534+2200"));
    assert_eq!(results.rows[1].get("P0"), &CellValue::Float(0.00156));
}

#[test]
fn single_object_is_wrapped() {
    let body = r#"{"JNAME": "J0534+2200", "DM": 56.77}"#;
    let results = normalize(body, &columns(&["JNAME", "DM"]));
    assert_eq!(results.rows.len(), 1);
    assert_eq!(results.rows[0].get("DM"), &CellValue::Float(56.77));
}

#[test]
fn nan_tokens_decode_like_null() {
    // the backend serializes unmeasured floats as literal NaN, which is
    // not valid JSON
    let body = r#"[{"JNAME": "J0534+2200", "S400": NaN},
                   {"JNAME": "J1939+2134", "S400": 1.2}]"#;
    let null_body = r#"[{"JNAME": "J0534+2200", "S400": null},
                   {"JNAME": "J1939+2134", "S400": 1.2}]"#;
    let cols = columns(&["JNAME", "S400"]);

    let repaired = normalize(body, &cols);
    assert_eq!(repaired, normalize(null_body, &cols));
    assert_eq!(repaired.rows[0].get("S400"), &CellValue::Missing);
}

#[test]
fn nan_in_array_positions_decodes_like_null() {
    let body = r#"[NaN, {"JNAME": "J0534+2200"}, NaN]"#;
    let null_body = r#"[null, {"JNAME": "J0534+2200"}, null]"#;
    let cols = columns(&["JNAME"]);

    let repaired = normalize(body, &cols);
    assert_eq!(repaired, normalize(null_body, &cols));
    assert_eq!(repaired.rows.len(), 1);
    assert_eq!(repaired.rows[0].identifier(), Some("J0534+2200"));
}

#[test]
fn string_nested_document_is_repaired_and_decoded() {
    // jsonify of a str: the row array arrives nested in a JSON string
    let body = serde_json::to_string(
        r#"[{"JNAME": "J0534+2200", "AGE": NaN}]"#,
    )
    .unwrap();
    let results = normalize(&body, &columns(&["JNAME", "AGE"]));
    assert_eq!(results.rows.len(), 1);
    assert_eq!(results.rows[0].get("AGE"), &CellValue::Missing);
}

#[test]
fn malformed_bodies_degrade_to_zero_rows() {
    let columns = columns(&["JNAME", "P0"]);
    for body in ["", "not json at all", "{\"unclosed\": ", "42", "true"] {
        let results = normalize(body, &columns);
        assert_eq!(results.rows.len(), 0, "body {body:?} produced rows");
        assert_eq!(results.columns, columns);
    }
}

#[test]
fn null_body_yields_empty_table() {
    let results = normalize("null", &columns(&["JNAME"]));
    assert!(results.is_empty());
    assert_eq!(results.columns, ["JNAME"]);
}

#[test]
fn columns_always_come_from_the_query() {
    // headers must render even when every row is dropped
    let results = normalize("[]", &columns(&["JNAME", "P0", "DM"]));
    assert_eq!(results.columns, ["JNAME", "P0", "DM"]);
    assert!(results.is_empty());
}

#[test]
fn missing_cells_render_as_na() {
    let body = r#"[{"JNAME": "x", "A": 1, "B": null}]"#;
    let ResultSet { columns, rows } =
        normalize(body, &columns(&["JNAME", "A", "B"]));
    let row = &rows[0];
    assert_eq!(row.get("A"), &CellValue::Integer(1));
    assert_eq!(row.get("A").to_string(), "1");
    assert_eq!(row.get("B"), &CellValue::Missing);
    assert_eq!(row.get("B").to_string(), "N/A");
    assert_eq!(columns, ["JNAME", "A", "B"]);
}

#[test]
fn row_order_is_preserved() {
    let body = r#"[{"JNAME": "c"}, {"JNAME": "a"}, {"JNAME": "b"}]"#;
    let results = normalize(body, &columns(&["JNAME"]));
    let order: Vec<_> =
        results.rows.iter().filter_map(|r| r.identifier()).collect();
    assert_eq!(order, ["c", "a", "b"]);
}
