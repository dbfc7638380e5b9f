use thiserror::Error;

/// Errors raised while decoding a row payload. All of them abort the
/// decode; no partial row is observable past the failing call.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload too small for row header")]
    HeaderTooSmall,

    #[error("row header declares {declared} bytes but payload has {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("unexpected end of payload at offset {offset} (needed {need} more bytes)")]
    UnexpectedEof { offset: usize, need: usize },

    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
