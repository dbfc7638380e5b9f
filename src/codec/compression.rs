use bytes::Bytes;
use lz4_flex::block::{
    compress_prepend_size as lz4_compress, decompress_size_prepended as lz4_decompress,
};
use tracing::debug;

use crate::errors::FetchError;
use crate::schema::table::Compression;

pub const ALGO_LZ4: u16 = 0x0001;

/// Block codec surface. The crate only ever invokes the inverse
/// transform on the fetch path; `compress` exists for round-trip tests
/// and tooling that fabricates payloads.
pub trait CompressionCodec {
    fn algo_id(&self) -> u16;
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FetchError>;
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FetchError>;
}

pub struct Lz4Codec;

impl CompressionCodec for Lz4Codec {
    fn algo_id(&self) -> u16 {
        ALGO_LZ4
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, FetchError> {
        Ok(lz4_compress(input))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, FetchError> {
        lz4_decompress(input)
            .map_err(|e| FetchError::DecompressionFailed(format!("lz4 decompress: {e}")))
    }
}

/// Reverse the table's block compression before any decoding. With no
/// compression declared the payload passes through untouched (a `Bytes`
/// clone, no copy). A transform failure aborts the decode; no partial
/// row is produced.
pub fn decompress_payload(payload: Bytes, compression: Compression) -> Result<Bytes, FetchError> {
    match compression {
        Compression::None => Ok(payload),
        Compression::Lz4 => {
            let raw = Lz4Codec.decompress(&payload)?;
            debug!(
                target: "codec::compression",
                compressed = payload.len(),
                uncompressed = raw.len(),
                "decompressed row payload"
            );
            Ok(Bytes::from(raw))
        }
    }
}
