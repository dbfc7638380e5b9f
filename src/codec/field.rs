use crate::codec::errors::DecodeError;
use crate::codec::reader::PayloadReader;
use crate::schema::types::{CellValue, ColumnType};

/// Decode one present field of the given declared type.
///
/// Encodings, little-endian throughout: Bool = 1 byte; Int32/Float =
/// 4 bytes; Int64/Timestamp/Double = 8 bytes; String/Blob = u32 length
/// prefix + raw bytes.
pub fn read_value(
    reader: &mut PayloadReader<'_>,
    ty: ColumnType,
) -> Result<CellValue, DecodeError> {
    let value = match ty {
        ColumnType::Bool => CellValue::Bool(reader.read_u8()? != 0),
        ColumnType::Int32 => CellValue::Int32(reader.read_i32_le()?),
        ColumnType::Int64 => CellValue::Int64(reader.read_i64_le()?),
        ColumnType::Float => CellValue::Float(reader.read_f32_le()?),
        ColumnType::Double => CellValue::Double(reader.read_f64_le()?),
        ColumnType::Timestamp => CellValue::Timestamp(reader.read_i64_le()?),
        ColumnType::String => {
            let len = reader.read_u32_le()? as usize;
            let bytes = reader.read_bytes(len)?;
            CellValue::String(String::from_utf8(bytes.to_vec())?)
        }
        ColumnType::Blob => {
            let len = reader.read_u32_le()? as usize;
            CellValue::Blob(reader.read_bytes(len)?.to_vec())
        }
    };
    Ok(value)
}

/// Advance past one present field without materializing it.
pub fn skip_value(reader: &mut PayloadReader<'_>, ty: ColumnType) -> Result<(), DecodeError> {
    match ty {
        ColumnType::Bool => reader.skip(1),
        ColumnType::Int32 | ColumnType::Float => reader.skip(4),
        ColumnType::Int64 | ColumnType::Double | ColumnType::Timestamp => reader.skip(8),
        ColumnType::String | ColumnType::Blob => {
            let len = reader.read_u32_le()? as usize;
            reader.skip(len)
        }
    }
}
