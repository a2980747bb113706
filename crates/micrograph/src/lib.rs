//! Micrograph: embedded-style neural network model loading and tensor
//! layout.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all Micrograph sub-crates. For most users, adding `micrograph` as a
//! single dependency is sufficient.
//!
//! Micrograph covers the bootstrap phase of an embedded inference
//! application: parsing a model container, resolving its operators
//! against registered kernels, and laying out every tensor in a single
//! heap-owned arena. Numeric execution is deliberately out of scope;
//! the deliverable is a bound interpreter with live input and output
//! tensor storage.
//!
//! # Quick start
//!
//! ```rust
//! use micrograph::prelude::*;
//!
//! // Describe a one-op graph and encode it into a model buffer.
//! let mut builder = ModelBuilder::new("demo");
//! let a = builder.add_tensor(TensorDef::new("a", ElementType::F32, &[2, 8]));
//! let b = builder.add_tensor(TensorDef::new("b", ElementType::F32, &[2, 8]));
//! let out = builder.add_tensor(TensorDef::new("out", ElementType::F32, &[2, 8]));
//! builder.add_op(OpKind::Add, &[a, b], &[out]);
//! builder.mark_input(a);
//! builder.mark_input(b);
//! builder.mark_output(out);
//! let buf = builder.encode().unwrap();
//!
//! // Load it: parse, bind kernels, lay out the arena.
//! let loaded = load_model(&buf, &ArenaConfig::new(4096)).unwrap();
//! let interp = loaded.interpreter();
//! assert_eq!(interp.op_count(), 1);
//! assert_eq!(interp.output(0).unwrap().data.len(), 16);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `micrograph-core` | IDs, tensor descriptors, op kinds |
//! | [`model`] | `micrograph-model` | Model container format, parser, builder |
//! | [`arena`] | `micrograph-arena` | Tensor arena allocator and config |
//! | [`kernel`] | `micrograph-kernel` | Kernel trait and op resolver |
//! | [`kernels`] | `micrograph-kernels` | Builtin operation kernels |
//! | [`runtime`] | `micrograph-runtime` | Interpreter and one-call loader |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`micrograph-core`).
///
/// Tensor descriptors ([`types::TensorDef`], [`types::ElementType`]),
/// operation kinds ([`types::OpKind`], [`types::OpSet`]), and the
/// kernel validation error type.
pub use micrograph_core as types;

/// Model container format (`micrograph-model`).
///
/// Parse buffers with [`model::Model::parse`], build them with
/// [`model::ModelBuilder`], or peek at just the header with
/// [`model::schema_version`].
pub use micrograph_model as model;

/// Tensor arena allocator (`micrograph-arena`).
///
/// [`arena::TensorArena`] owns all tensor storage for a loaded model;
/// [`arena::ArenaConfig`] sets the byte budget.
pub use micrograph_arena as arena;

/// Kernel trait and registry (`micrograph-kernel`).
///
/// The [`kernel::Kernel`] trait is the extension point for custom
/// operations; [`kernel::OpResolver`] holds the registered set.
pub use micrograph_kernel as kernel;

/// Builtin operation kernels (`micrograph-kernels`).
///
/// [`kernels::register_builtins`] installs the full set and reports
/// the outcome per kernel.
pub use micrograph_kernels as kernels;

/// Interpreter and loader (`micrograph-runtime`).
///
/// [`runtime::load_model`] runs the whole bootstrap; the resulting
/// [`runtime::Interpreter`] exposes tensor views backed by the arena.
pub use micrograph_runtime as runtime;

/// Common imports for typical Micrograph usage.
///
/// ```rust
/// use micrograph::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use micrograph_core::{ElementType, OpKind, OpSet, TensorDef, TensorId};

    // Model format
    pub use micrograph_model::{Model, ModelBuilder, ModelError};

    // Arena
    pub use micrograph_arena::{ArenaConfig, ArenaError, TensorArena};

    // Kernels
    pub use micrograph_kernel::{Kernel, OpInvocation, OpResolver};
    pub use micrograph_kernels::register_builtins;

    // Runtime
    pub use micrograph_runtime::{load_model, Interpreter, LoadError, LoadedModel, TensorView};
}
