use std::time::Duration;

use thiserror::Error;

use crate::codec::errors::DecodeError;

/// Failures a row fetch can surface. Every variant is terminal for the
/// request; nothing here is retried internally. "Row not found" is not an
/// error — it is modeled as an absent result on the fetch API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The table has no known column layout at all.
    #[error("no schema for table '{0}'")]
    SchemaMissing(String),

    /// A fixed-layout payload carried a version tag absent from the
    /// table's version map. Client and server metadata have diverged.
    #[error("unknown schema version {0}")]
    UnknownSchemaVersion(u16),

    /// The version map resolved to a layout key with no registered
    /// layout. Client and server metadata have diverged.
    #[error("no layout mapped for column count {0}")]
    UnknownLayoutMapping(usize),

    /// The remote call completed with a non-success status. Code and
    /// message are surfaced verbatim.
    #[error("request failed with code {code}: {message}")]
    RequestFailed { code: i32, message: String },

    /// The underlying call completed without yielding a response.
    #[error("remote call completed without a response")]
    NoResponse,

    /// The underlying call was cancelled before a payload arrived.
    #[error("remote call was cancelled")]
    Cancelled,

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    /// A bounded wait expired. The underlying call is still outstanding
    /// and can be cancelled.
    #[error("wait timed out after {0:?}")]
    Timeout(Duration),

    /// `await_row_into` was handed a window outside the buffer.
    #[error("window [{start}, {start}+{len}) out of bounds for buffer of {buf_len}")]
    WindowOutOfBounds {
        start: usize,
        len: usize,
        buf_len: usize,
    },

    #[error("row decode failed: {0}")]
    Decode(#[from] DecodeError),
}
