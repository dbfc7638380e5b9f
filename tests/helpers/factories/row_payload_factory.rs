use bytes::Bytes;

use crate::codec::compression::{CompressionCodec, Lz4Codec};
use crate::codec::header::{RowHeader, bitmap_len, bitmap_set_null};
use crate::schema::types::CellValue;

/// Encodes row payloads for tests; the crate itself never writes rows.
pub struct RowPayloadFactory {
    version: u16,
    cells: Vec<CellValue>,
}

impl RowPayloadFactory {
    /// Version 1, cells `[7, "abc"]` — matching `LayoutFactory::new()`.
    pub fn new() -> Self {
        Self {
            version: 1,
            cells: vec![CellValue::Int32(7), CellValue::String("abc".to_string())],
        }
    }

    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn cells(mut self, cells: Vec<CellValue>) -> Self {
        self.cells = cells;
        self
    }

    pub fn push(mut self, cell: CellValue) -> Self {
        self.cells.push(cell);
        self
    }

    /// Fixed-layout ("v1") encoding: header, null bitmap, field data.
    pub fn encode_fixed(&self) -> Bytes {
        let mut buf = Vec::new();
        RowHeader {
            version: self.version,
            size: 0,
        }
        .write_to(&mut buf);

        let bitmap_start = buf.len();
        buf.resize(bitmap_start + bitmap_len(self.cells.len()), 0);
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_null() {
                let bitmap_end = bitmap_start + bitmap_len(self.cells.len());
                bitmap_set_null(&mut buf[bitmap_start..bitmap_end], idx);
            }
        }
        for cell in &self.cells {
            write_value(&mut buf, cell);
        }

        let size = buf.len() as u32;
        buf[2..6].copy_from_slice(&size.to_le_bytes());
        Bytes::from(buf)
    }

    /// Legacy ("v0") encoding: presence byte per column, then field data.
    pub fn encode_legacy(&self) -> Bytes {
        let mut buf = Vec::new();
        for cell in &self.cells {
            if cell.is_null() {
                buf.push(0);
            } else {
                buf.push(1);
                write_value(&mut buf, cell);
            }
        }
        Bytes::from(buf)
    }

    pub fn encode_fixed_lz4(&self) -> Bytes {
        Bytes::from(Lz4Codec.compress(&self.encode_fixed()).unwrap())
    }

    pub fn encode_legacy_lz4(&self) -> Bytes {
        Bytes::from(Lz4Codec.compress(&self.encode_legacy()).unwrap())
    }
}

fn write_value(buf: &mut Vec<u8>, cell: &CellValue) {
    match cell {
        CellValue::Null => {}
        CellValue::Bool(b) => buf.push(*b as u8),
        CellValue::Int32(i) => buf.extend_from_slice(&i.to_le_bytes()),
        CellValue::Int64(i) => buf.extend_from_slice(&i.to_le_bytes()),
        CellValue::Float(v) => buf.extend_from_slice(&v.to_le_bytes()),
        CellValue::Double(v) => buf.extend_from_slice(&v.to_le_bytes()),
        CellValue::Timestamp(ts) => buf.extend_from_slice(&ts.to_le_bytes()),
        CellValue::String(s) => {
            buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            buf.extend_from_slice(s.as_bytes());
        }
        CellValue::Blob(bytes) => {
            buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
            buf.extend_from_slice(bytes);
        }
    }
}
