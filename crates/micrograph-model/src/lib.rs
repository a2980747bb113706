//! Binary model container format for the Micrograph inference bootstrap.
//!
//! A model buffer describes a neural-network graph well enough for the
//! loader to bind kernels and lay out tensor storage: a tensor table,
//! an operator list referencing tensors by index, designated input and
//! output tensors, and an opaque weight blob. The numeric content of
//! the weights is never interpreted here.
//!
//! # Format
//!
//! ```text
//! [MAGIC "MGPH"] [schema_version u32]
//! [ModelMeta: name, producer]
//! [tensor count u32] [TensorDef...]
//! [operator count u32] [OperatorDef...]
//! [input tensor ids] [output tensor ids]
//! [weights: length-prefixed bytes]
//! ```
//!
//! All integers are little-endian. Strings and byte arrays are
//! length-prefixed with a `u32` length. The format is intentionally
//! simple — no compression, no alignment padding, no self-describing
//! schema. The schema version field sits immediately after the magic
//! so it can be checked before anything else is parsed
//! ([`schema_version`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod codec;
pub mod error;
pub mod model;
pub mod types;

pub use builder::ModelBuilder;
pub use error::ModelError;
pub use model::{schema_version, Model};
pub use types::{ModelMeta, OperatorDef};

/// Magic bytes at the start of every model buffer.
pub const MAGIC: [u8; 4] = *b"MGPH";

/// The schema version this build supports.
///
/// Buffers carrying any other version are rejected before further
/// parsing.
pub const SCHEMA_VERSION: u32 = 3;
