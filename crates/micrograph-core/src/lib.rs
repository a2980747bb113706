//! Core types for the Micrograph inference bootstrap.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Micrograph workspace:
//! type IDs, tensor descriptors, the supported-operation enum and set,
//! and the kernel validation error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod ops;
pub mod tensor;

pub use error::KernelError;
pub use id::TensorId;
pub use ops::{OpKind, OpSet};
pub use tensor::{ElementType, Shape, TensorDef};
