//! Load-time error types.

use std::error::Error;
use std::fmt;

use micrograph_arena::ArenaError;
use micrograph_core::{KernelError, OpKind};
use micrograph_kernel::RegistryError;
use micrograph_model::ModelError;

/// Errors from loading a model into an interpreter.
///
/// Each failure kind is its own variant so callers can distinguish a
/// corrupt buffer from a missing kernel from an undersized arena
/// without parsing message strings.
#[derive(Debug)]
pub enum LoadError {
    /// The model buffer could not be parsed.
    Model(ModelError),
    /// One or more builtin kernels failed to register.
    Registry {
        /// The operations whose registration failed, with the cause.
        failures: Vec<(OpKind, RegistryError)>,
    },
    /// The model contains no operators.
    EmptyGraph,
    /// An operator names an operation this build does not know.
    UnknownOp {
        /// Position of the operator in the graph.
        index: usize,
        /// The unrecognised wire name.
        name: String,
    },
    /// An operator's operation is known but has no registered kernel.
    UnregisteredOp {
        /// Position of the operator in the graph.
        index: usize,
        /// The operation without a kernel.
        op: OpKind,
    },
    /// A kernel rejected an operator's tensor signature.
    Kernel {
        /// Position of the operator in the graph.
        index: usize,
        /// The operation whose kernel rejected the signature.
        op: OpKind,
        /// Why the signature was rejected.
        reason: KernelError,
    },
    /// Tensor storage could not be laid out in the arena.
    Arena(ArenaError),
    /// The model designates no input tensors.
    MissingInput,
    /// The model designates no output tensors.
    MissingOutput,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(e) => write!(f, "model parse failed: {e}"),
            Self::Registry { failures } => {
                write!(f, "kernel registration failed for ")?;
                for (i, (op, _)) in failures.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{op}")?;
                }
                Ok(())
            }
            Self::EmptyGraph => write!(f, "model contains no operators"),
            Self::UnknownOp { index, name } => {
                write!(f, "operator {index} names unknown operation '{name}'")
            }
            Self::UnregisteredOp { index, op } => {
                write!(f, "operator {index} needs {op}, which has no registered kernel")
            }
            Self::Kernel { index, op, reason } => {
                write!(f, "operator {index} ({op}) rejected: {reason}")
            }
            Self::Arena(e) => write!(f, "tensor layout failed: {e}"),
            Self::MissingInput => write!(f, "model designates no input tensors"),
            Self::MissingOutput => write!(f, "model designates no output tensors"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Kernel { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<ModelError> for LoadError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

impl From<ArenaError> for LoadError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
