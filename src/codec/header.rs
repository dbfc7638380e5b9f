use crate::codec::errors::DecodeError;
use crate::codec::reader::PayloadReader;

/// Header of a fixed-layout ("v1") row payload.
///
/// Wire layout, little-endian:
///
/// ```text
/// [0..2)  schema version tag, u16
/// [2..6)  total payload size in bytes, u32
/// [6..6+B) null bitmap, B = (column_count + 7) / 8
/// ```
///
/// The bitmap length depends on the active layout and is read by the
/// decoder, not carried here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowHeader {
    pub version: u16,
    pub size: u32,
}

impl RowHeader {
    pub const LEN: usize = 2 + 4;

    /// Read the version tag without consuming anything. The session uses
    /// this for resolution; decoding re-reads the full header.
    pub fn peek_version(bytes: &[u8]) -> Option<u16> {
        if bytes.len() < 2 {
            return None;
        }
        let mut buf = [0u8; 2];
        buf.copy_from_slice(&bytes[..2]);
        Some(u16::from_le_bytes(buf))
    }

    pub fn read_from(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        if reader.remaining() < Self::LEN {
            return Err(DecodeError::HeaderTooSmall);
        }
        let version = reader.read_u16_le()?;
        let size = reader.read_u32_le()?;
        Ok(Self { version, size })
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.version.to_le_bytes());
        buf.extend_from_slice(&self.size.to_le_bytes());
    }
}

/// Bytes needed to carry one null bit per column.
pub fn bitmap_len(column_count: usize) -> usize {
    (column_count + 7) / 8
}

/// Bit i set = column i is null.
pub fn bitmap_is_null(bitmap: &[u8], idx: usize) -> bool {
    bitmap[idx / 8] & (1 << (idx % 8)) != 0
}

pub fn bitmap_set_null(bitmap: &mut [u8], idx: usize) {
    bitmap[idx / 8] |= 1 << (idx % 8);
}
