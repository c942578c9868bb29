//! Serialized records of a sheet

use pretty_assertions::assert_eq;
use serde_json::json;
use sheetcalc::prelude::*;
use sheetcalc::{CellRecord, SheetRecords};

fn sample_sheet() -> Spreadsheet {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell("A1", Some("10"), None).unwrap();
    sheet.set_cell("A2", Some("label"), None).unwrap();
    sheet.set_cell("B1", None, Some("A1*2")).unwrap();
    sheet.set_cell("B2", None, Some("SUM(A1:A3)")).unwrap();
    sheet
}

/// Test the JSON shape of the records
#[test]
fn test_records_to_json() {
    let records = sample_sheet().to_records();
    let value = serde_json::to_value(&records).unwrap();

    assert_eq!(
        value,
        json!({
            "A1": { "value": 10.0, "dependents": ["B1", "B2"] },
            "A2": { "value": "label", "dependents": ["B2"] },
            "A3": { "value": null, "dependents": ["B2"] },
            "B1": { "value": 20.0, "formula": "A1*2" },
            "B2": { "value": 10.0, "formula": "SUM(A1:A3)" },
        })
    );
}

/// Test that a sheet survives a trip through JSON
#[test]
fn test_records_json_round_trip() {
    let sheet = sample_sheet();
    let text = serde_json::to_string(&sheet.to_records()).unwrap();

    let records: SheetRecords = serde_json::from_str(&text).unwrap();
    let mut restored = Spreadsheet::from_records(&records).unwrap();

    assert_eq!(restored.to_records(), sheet.to_records());
    assert_eq!(restored.get_cell_value("B1"), FormulaValue::Number(20.0));

    restored.set_cell("A3", Some("5"), None).unwrap();
    assert_eq!(restored.get_cell_value("B2"), FormulaValue::Number(15.0));
}

/// Test loading hand-written records with missing fields
#[test]
fn test_records_from_minimal_json() {
    let records: SheetRecords = serde_json::from_value(json!({
        "A1": { "value": 4 },
        "C1": { "formula": "=SQRT(A1)" },
    }))
    .unwrap();

    assert_eq!(
        records[&CellAddress::parse("C1").unwrap()],
        CellRecord {
            value: CellValue::Empty,
            formula: Some("=SQRT(A1)".into()),
            dependents: Vec::new(),
        }
    );

    let sheet = Spreadsheet::from_records(&records).unwrap();
    assert_eq!(sheet.get_cell_value("C1"), FormulaValue::Number(2.0));
}

/// Test that malformed addresses are rejected while loading
#[test]
fn test_records_reject_bad_address() {
    let result: Result<SheetRecords, _> = serde_json::from_value(json!({
        "a1": { "value": 1 },
    }));
    assert!(result.is_err());
}
