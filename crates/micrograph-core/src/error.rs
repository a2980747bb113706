//! Kernel signature-validation errors.
//!
//! Kernels do not execute numeric operations in this bootstrap; they
//! validate operator signatures at load time. [`KernelError`] reports
//! why a signature was rejected, and is wrapped with the operator index
//! by the interpreter so callers can locate the failing operator.

use std::error::Error;
use std::fmt;

use crate::tensor::ElementType;

/// Why a kernel rejected an operator signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Wrong number of input or output tensors.
    ArityMismatch {
        /// What the kernel expects (e.g. `"2 inputs, 1 output"`).
        expected: String,
        /// Number of inputs found.
        inputs: usize,
        /// Number of outputs found.
        outputs: usize,
    },
    /// A tensor has the wrong rank.
    RankMismatch {
        /// Name of the offending tensor.
        tensor: String,
        /// Expected rank.
        expected: usize,
        /// Rank found.
        found: usize,
    },
    /// A tensor has the wrong element type.
    ElementTypeMismatch {
        /// Name of the offending tensor.
        tensor: String,
        /// Expected element type.
        expected: ElementType,
        /// Element type found.
        found: ElementType,
    },
    /// A tensor's element type is outside the set the operation accepts.
    UnsupportedElementType {
        /// Name of the offending tensor.
        tensor: String,
        /// Element type found.
        found: ElementType,
    },
    /// Tensor shapes violate the kernel's shape relation.
    ShapeMismatch {
        /// Description of the violated relation.
        detail: String,
    },
    /// Input and output element counts differ where they must agree.
    ElementCountMismatch {
        /// Input element count.
        input: u64,
        /// Output element count.
        output: u64,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                expected,
                inputs,
                outputs,
            } => {
                write!(
                    f,
                    "arity mismatch: expected {expected}, found {inputs} inputs, {outputs} outputs"
                )
            }
            Self::RankMismatch {
                tensor,
                expected,
                found,
            } => {
                write!(
                    f,
                    "tensor '{tensor}' has rank {found}, expected {expected}"
                )
            }
            Self::ElementTypeMismatch {
                tensor,
                expected,
                found,
            } => {
                write!(
                    f,
                    "tensor '{tensor}' has element type {found}, expected {expected}"
                )
            }
            Self::UnsupportedElementType { tensor, found } => {
                write!(
                    f,
                    "tensor '{tensor}' has element type {found}, which this operation does not accept"
                )
            }
            Self::ShapeMismatch { detail } => write!(f, "shape mismatch: {detail}"),
            Self::ElementCountMismatch { input, output } => {
                write!(
                    f,
                    "element count mismatch: input has {input}, output has {output}"
                )
            }
        }
    }
}

impl Error for KernelError {}
