//! Test fixtures and mock kernels for Micrograph development.
//!
//! The centerpiece is [`fixtures::palm_detection_model`], a
//! palm-detection-shaped model buffer that exercises every builtin
//! operation; the smaller fixtures build deliberately broken buffers
//! for failure-path tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    model_with_op, model_with_schema_version, oversized_model, palm_detection_model, tiny_model,
};

use micrograph_core::{KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

/// Mock kernel that accepts any signature for a chosen operation.
///
/// Useful for testing resolver and interpreter behavior without
/// dragging real validation rules into the assertion.
pub struct PermissiveKernel {
    op: OpKind,
    scratch: usize,
}

impl PermissiveKernel {
    pub fn new(op: OpKind) -> Self {
        Self { op, scratch: 0 }
    }

    /// Declare a fixed scratch requirement, in bytes.
    pub fn with_scratch(op: OpKind, scratch: usize) -> Self {
        Self { op, scratch }
    }
}

impl Kernel for PermissiveKernel {
    fn op(&self) -> OpKind {
        self.op
    }

    fn validate(&self, _invocation: &OpInvocation<'_>) -> Result<(), KernelError> {
        Ok(())
    }

    fn scratch_bytes(&self, _invocation: &OpInvocation<'_>) -> usize {
        self.scratch
    }
}

/// Mock kernel that rejects every signature with a fixed error.
pub struct RejectingKernel {
    op: OpKind,
}

impl RejectingKernel {
    pub fn new(op: OpKind) -> Self {
        Self { op }
    }
}

impl Kernel for RejectingKernel {
    fn op(&self) -> OpKind {
        self.op
    }

    fn validate(&self, invocation: &OpInvocation<'_>) -> Result<(), KernelError> {
        Err(KernelError::ArityMismatch {
            expected: "nothing this kernel would accept".to_string(),
            inputs: invocation.inputs.len(),
            outputs: invocation.outputs.len(),
        })
    }
}
