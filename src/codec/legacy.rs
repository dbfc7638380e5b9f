//! Legacy ("v0") row decoder.
//!
//! No header and no version tag: rows are a presence-byte stream in the
//! declared column order of whatever layout the caller's table metadata
//! currently holds. Projection is client-side, by schema index.

use crate::codec::errors::DecodeError;
use crate::codec::field::{read_value, skip_value};
use crate::codec::reader::PayloadReader;
use crate::schema::layout::ColumnLayout;
use crate::schema::types::CellValue;

/// Decode every column of the schema into `row[start..start + len]`, in
/// declared order. Columns at or past `len` are not read.
pub fn decode(
    payload: &[u8],
    layout: &ColumnLayout,
    row: &mut [CellValue],
    start: usize,
    len: usize,
) -> Result<(), DecodeError> {
    let mut reader = PayloadReader::new(payload);
    for (idx, column) in layout.columns().iter().enumerate() {
        if idx >= len {
            break;
        }
        let present = reader.read_u8()? != 0;
        row[start + idx] = if present {
            read_value(&mut reader, column.ty)?
        } else {
            CellValue::Null
        };
    }
    Ok(())
}

/// Decode only the projected schema indices, placing them in projection
/// order: `cols[j]` lands at `row[start + j]`. Unselected fields are
/// skipped, not materialized. A projected index outside the schema (or a
/// slot past `len`) leaves its window slot untouched.
pub fn decode_projected(
    payload: &[u8],
    layout: &ColumnLayout,
    cols: &[usize],
    row: &mut [CellValue],
    start: usize,
    len: usize,
) -> Result<(), DecodeError> {
    // Stop the walk once nothing past this schema index is selected.
    let max_selected = match cols.iter().max() {
        Some(max) => *max,
        None => return Ok(()),
    };

    let mut reader = PayloadReader::new(payload);
    for (idx, column) in layout.columns().iter().enumerate() {
        if idx > max_selected {
            break;
        }
        let present = reader.read_u8()? != 0;
        if !cols.contains(&idx) {
            if present {
                skip_value(&mut reader, column.ty)?;
            }
            continue;
        }
        let value = if present {
            read_value(&mut reader, column.ty)?
        } else {
            CellValue::Null
        };
        for (out, col) in cols.iter().enumerate() {
            if *col == idx && out < len {
                row[start + out] = value.clone();
            }
        }
    }
    Ok(())
}
