//! Error types for model encoding and parsing.

use std::fmt;
use std::io;

/// Errors that can occur while encoding or parsing a model buffer.
#[derive(Debug)]
pub enum ModelError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The buffer does not start with the expected `b"MGPH"` magic bytes.
    InvalidMagic,
    /// The schema version is not supported by this build.
    UnsupportedSchemaVersion {
        /// The version found in the buffer.
        found: u32,
        /// The version this build supports.
        supported: u32,
    },
    /// A section could not be decoded (truncated or corrupt data).
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// An operator or I/O list references a tensor index beyond the table.
    TensorIndexOutOfRange {
        /// The out-of-range index.
        index: u32,
        /// Number of tensors in the table.
        count: u32,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"MGPH\")"),
            Self::UnsupportedSchemaVersion { found, supported } => {
                write!(
                    f,
                    "model schema version {found} is not the supported version {supported}"
                )
            }
            Self::Malformed { detail } => write!(f, "malformed model: {detail}"),
            Self::TensorIndexOutOfRange { index, count } => {
                write!(
                    f,
                    "tensor index {index} out of range (table has {count} tensors)"
                )
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ModelError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
