use byte_view::ValueKind;
use struct_format::FormatError;
use thiserror::Error;

/// Everything pack/unpack can reject.
///
/// Every variant is raised before the output buffer is touched.
#[derive(Debug, Error)]
pub enum StructError {
    #[error("invalid format: {0}")]
    Format(#[from] FormatError),

    #[error("format takes {expected} values, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("format describes {expected} bytes, buffer has {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("item {index} expects a {expected} value, got {found}")]
    TypeMismatch {
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("record of {needed} bytes at offset {offset} overruns a {available}-byte buffer")]
    BufferTooSmall {
        needed: usize,
        offset: usize,
        available: usize,
    },

    #[error("buffer of {len} bytes is not a whole number of {record}-byte records")]
    TrailingBytes { len: usize, record: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StructError>;
