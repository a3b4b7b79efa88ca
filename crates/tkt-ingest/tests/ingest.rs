use std::fs;

use tkt_ingest::{IngestError, read_records, write_json, write_output};
use tkt_model::OutputRow;

#[test]
fn reads_orders_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("orders.csv");
    fs::write(&path, "order_id,customer_id\n1,10\n\n2, 11 \n,13\n").expect("write file");

    let records = read_records(&path).expect("read csv");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("order_id"), Some("1"));
    assert_eq!(records[1].get("customer_id"), Some("11"));
    assert_eq!(records[2].get("order_id"), Some(""));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_only_file_has_no_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("barcodes.csv");
    fs::write(&path, "barcode,order_id\n").expect("write file");
    assert!(read_records(&path).expect("read csv").is_empty());
}

#[test]
fn writes_output_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("output.csv");
    let rows = vec![
        OutputRow {
            customer_id: "10".to_string(),
            order_id: "1".to_string(),
            barcodes: "11111111111,22222222222".to_string(),
        },
        OutputRow {
            customer_id: "11".to_string(),
            order_id: "2".to_string(),
            barcodes: "33333333333".to_string(),
        },
    ];
    write_output(&path, &rows).expect("write output");

    let written = fs::read_to_string(&path).expect("read output");
    assert_eq!(
        written,
        "customer_id,order_id,barcodes\n10,1,\"11111111111,22222222222\"\n11,2,33333333333\n"
    );
}

#[test]
fn empty_output_is_refused() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("output.csv");
    let err = write_output(&path, &[]).unwrap_err();
    assert!(matches!(err, IngestError::NoRows { .. }));
    assert!(!path.exists());
}

#[test]
fn writes_json_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.json");
    write_json(&path, &serde_json::json!({ "unused": 2 })).expect("write json");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read json")).expect("parse json");
    assert_eq!(value["unused"], 2);
}
