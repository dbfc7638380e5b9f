use crate::codec::header::{RowHeader, bitmap_is_null};
use crate::schema::types::CellValue;
use crate::test_helpers::factories::RowPayloadFactory;

#[test]
fn fixed_encoding_carries_version_and_exact_size() {
    let payload = RowPayloadFactory::new().version(3).encode_fixed();
    assert_eq!(RowHeader::peek_version(&payload), Some(3));

    let size = u32::from_le_bytes(payload[2..6].try_into().unwrap());
    assert_eq!(size as usize, payload.len());
}

#[test]
fn fixed_encoding_marks_null_cells_in_bitmap() {
    let payload = RowPayloadFactory::new()
        .cells(vec![CellValue::Null, CellValue::Int32(1)])
        .encode_fixed();
    let bitmap = &payload[RowHeader::LEN..RowHeader::LEN + 1];
    assert!(bitmap_is_null(bitmap, 0));
    assert!(!bitmap_is_null(bitmap, 1));
}

#[test]
fn legacy_encoding_uses_presence_bytes() {
    let payload = RowPayloadFactory::new()
        .cells(vec![CellValue::Bool(true), CellValue::Null])
        .encode_legacy();
    // present bool, then an absent column with no field bytes
    assert_eq!(payload.as_ref(), &[1u8, 1, 0][..]);
}
