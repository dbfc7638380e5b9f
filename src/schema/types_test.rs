use std::str::FromStr;

use serde_json::json;

use crate::schema::types::{CellValue, ColumnType};

#[test]
fn wire_ids_round_trip() {
    let all = [
        ColumnType::Bool,
        ColumnType::Int32,
        ColumnType::Int64,
        ColumnType::Float,
        ColumnType::Double,
        ColumnType::Timestamp,
        ColumnType::String,
        ColumnType::Blob,
    ];
    for ty in all {
        assert_eq!(ColumnType::from_wire_id(ty.wire_id()), Some(ty));
    }
    assert_eq!(ColumnType::from_wire_id(200), None);
}

#[test]
fn parses_type_names_and_aliases() {
    assert_eq!(ColumnType::from_str("int32"), Ok(ColumnType::Int32));
    assert_eq!(ColumnType::from_str("int"), Ok(ColumnType::Int32));
    assert_eq!(ColumnType::from_str("bigint"), Ok(ColumnType::Int64));
    assert_eq!(ColumnType::from_str("binary"), Ok(ColumnType::Blob));
    assert!(ColumnType::from_str("decimal").is_err());
    assert_eq!(ColumnType::Timestamp.to_string(), "timestamp");
}

#[test]
fn cell_reports_its_column_type() {
    assert_eq!(CellValue::Null.column_type(), None);
    assert!(CellValue::Null.is_null());
    assert_eq!(
        CellValue::Int32(7).column_type(),
        Some(ColumnType::Int32)
    );
    assert_eq!(
        CellValue::Timestamp(1_700_000_000_000).column_type(),
        Some(ColumnType::Timestamp)
    );
}

#[test]
fn cell_json_rendering() {
    assert_eq!(CellValue::Null.to_json(), json!(null));
    assert_eq!(CellValue::Bool(true).to_json(), json!(true));
    assert_eq!(CellValue::Int32(7).to_json(), json!(7));
    assert_eq!(CellValue::Int64(-1).to_json(), json!(-1));
    assert_eq!(CellValue::Double(1.5).to_json(), json!(1.5));
    assert_eq!(
        CellValue::String("abc".to_string()).to_json(),
        json!("abc")
    );
    // NaN has no JSON representation
    assert_eq!(CellValue::Double(f64::NAN).to_json(), json!(null));
    // blobs render as base64
    assert_eq!(CellValue::Blob(vec![0xff, 0x00]).to_json(), json!("/wA="));
}
