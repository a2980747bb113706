//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use micrograph_core::TensorId;

/// Errors that can occur during arena allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena cannot satisfy the request within its byte budget.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Total arena capacity in bytes.
        capacity: usize,
    },
    /// A tensor was allocated twice.
    DuplicateTensor {
        /// The tensor that already has a region.
        tensor: TensorId,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::DuplicateTensor { tensor } => {
                write!(f, "tensor {tensor} already has an arena region")
            }
        }
    }
}

impl Error for ArenaError {}
