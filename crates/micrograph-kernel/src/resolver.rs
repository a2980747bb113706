//! The kernel registry consulted during model binding.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use micrograph_core::{OpKind, OpSet};

use crate::kernel::Kernel;

/// Errors from kernel registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A kernel for this operation is already registered.
    DuplicateKernel {
        /// The operation that already has a kernel.
        op: OpKind,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKernel { op } => {
                write!(f, "a kernel for {op} is already registered")
            }
        }
    }
}

impl Error for RegistryError {}

/// Registry mapping operation kinds to their kernels.
///
/// At most one kernel per operation. Iteration order is registration
/// order, which keeps diagnostics stable across runs.
#[derive(Default)]
pub struct OpResolver {
    kernels: IndexMap<OpKind, Box<dyn Kernel>>,
}

impl OpResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kernel for its operation kind.
    ///
    /// On a duplicate, the existing kernel is kept and the new one is
    /// dropped.
    pub fn register(&mut self, kernel: Box<dyn Kernel>) -> Result<(), RegistryError> {
        let op = kernel.op();
        if self.kernels.contains_key(&op) {
            return Err(RegistryError::DuplicateKernel { op });
        }
        self.kernels.insert(op, kernel);
        Ok(())
    }

    /// Look up the kernel for an operation.
    pub fn resolve(&self, op: OpKind) -> Option<&dyn Kernel> {
        self.kernels.get(&op).map(|k| k.as_ref())
    }

    /// The set of operations with a registered kernel.
    pub fn registered(&self) -> OpSet {
        self.kernels.keys().copied().collect()
    }

    /// Number of registered kernels.
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Whether no kernels are registered.
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}
