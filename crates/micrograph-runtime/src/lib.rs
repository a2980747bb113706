//! Model interpreter and loader for the Micrograph inference bootstrap.
//!
//! This crate ties the stack together: parse a model buffer
//! (`micrograph-model`), resolve its operators against registered
//! kernels (`micrograph-kernel`, `micrograph-kernels`), and lay out all
//! tensor storage in a heap-owned arena (`micrograph-arena`). The
//! result is an [`Interpreter`] whose input and output tensor views are
//! ready for a numeric runtime to fill and drain.
//!
//! No inference is executed here. The loader's contract ends at a
//! fully bound, fully allocated interpreter and a precise
//! [`LoadError`] when any step fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod interpreter;
pub mod loader;

pub use error::LoadError;
pub use interpreter::{Interpreter, TensorView, TensorViewMut};
pub use loader::{load_model, LoadedModel};
