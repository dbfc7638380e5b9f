//! Fixed-layout ("v1") row decoder.
//!
//! Payloads carry their own schema-version tag and a per-column null
//! bitmap (see [`crate::codec::header`]). The decoder consumes the layout
//! the session resolved for that tag; it never builds one itself.

use crate::codec::errors::DecodeError;
use crate::codec::field::read_value;
use crate::codec::header::{RowHeader, bitmap_is_null, bitmap_len};
use crate::codec::reader::PayloadReader;
use crate::schema::layout::ColumnLayout;
use crate::schema::types::CellValue;

/// Decode a v1 payload positionally into `row[start..start + len]`.
///
/// Column i lands at `row[start + i]`; columns at or past `len` are not
/// read, and window slots past the column count are left untouched.
pub fn decode(
    payload: &[u8],
    layout: &ColumnLayout,
    row: &mut [CellValue],
    start: usize,
    len: usize,
) -> Result<(), DecodeError> {
    let mut reader = PayloadReader::new(payload);
    let header = RowHeader::read_from(&mut reader)?;
    if header.size as usize != payload.len() {
        return Err(DecodeError::SizeMismatch {
            declared: header.size as usize,
            actual: payload.len(),
        });
    }

    let bitmap = reader.read_bytes(bitmap_len(layout.len()))?;

    for (idx, column) in layout.columns().iter().enumerate() {
        if idx >= len {
            break;
        }
        row[start + idx] = if bitmap_is_null(bitmap, idx) {
            CellValue::Null
        } else {
            read_value(&mut reader, column.ty)?
        };
    }
    Ok(())
}
