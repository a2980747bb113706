//! Heap-owned tensor arena for the Micrograph inference bootstrap.
//!
//! All tensor storage for a loaded model lives in a single contiguous
//! `Vec<f32>` with an offset table, sized up front from a configured
//! byte budget. The arena is owned by the interpreter and lives as long
//! as it does, so tensor views handed out to callers are always backed
//! by live memory.
//!
//! Storage is bump-allocated: each tensor claims the next free run of
//! slots and regions never move or overlap. Non-f32 tensors round up to
//! whole 4-byte slots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;

pub use arena::TensorArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
