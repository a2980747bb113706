//! Kernel trait and op resolver for the Micrograph inference bootstrap.
//!
//! A [`Kernel`] is the per-operation unit of the loader: it validates
//! an operator's tensor signature and declares its scratch-memory
//! needs. Kernels never execute numeric math here; binding a model is
//! about proving the graph is well-formed and laying out memory, not
//! running it.
//!
//! The [`OpResolver`] is the registry the interpreter consults while
//! binding: one kernel per operation kind, looked up by [`OpKind`].
//!
//! [`OpKind`]: micrograph_core::OpKind

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kernel;
pub mod resolver;

pub use kernel::{Kernel, OpInvocation};
pub use resolver::{OpResolver, RegistryError};
