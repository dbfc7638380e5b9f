pub mod compression;
pub mod errors;
pub mod field;
pub mod fixed;
pub mod header;
pub mod legacy;
pub mod reader;

pub use compression::{CompressionCodec, Lz4Codec, decompress_payload};
pub use errors::DecodeError;
pub use header::RowHeader;
pub use reader::PayloadReader;
