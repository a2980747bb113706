//! The [`Kernel`] trait and [`OpInvocation`] view.

use micrograph_core::{KernelError, OpKind, TensorDef};
use smallvec::SmallVec;

/// One operator's resolved tensor signature, as seen by a kernel.
///
/// Borrowed views into the model's tensor table, in the operator's
/// declared order. Built by the interpreter for each operator before
/// calling [`Kernel::validate`].
#[derive(Clone, Debug)]
pub struct OpInvocation<'a> {
    /// Position of the operator in the model's graph, for diagnostics.
    pub op_index: usize,
    /// Input tensor definitions, in kernel-defined order.
    pub inputs: SmallVec<[&'a TensorDef; 3]>,
    /// Output tensor definitions.
    pub outputs: SmallVec<[&'a TensorDef; 2]>,
}

impl<'a> OpInvocation<'a> {
    /// Build an invocation from borrowed tensor definitions.
    pub fn new(op_index: usize, inputs: &[&'a TensorDef], outputs: &[&'a TensorDef]) -> Self {
        Self {
            op_index,
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
        }
    }

    /// The `i`-th input tensor, if present.
    pub fn input(&self, i: usize) -> Option<&'a TensorDef> {
        self.inputs.get(i).copied()
    }

    /// The `i`-th output tensor, if present.
    pub fn output(&self, i: usize) -> Option<&'a TensorDef> {
        self.outputs.get(i).copied()
    }
}

/// A declarative kernel for one operation kind.
///
/// Kernels are stateless and validated-only: `validate` checks that an
/// operator's tensor signature (arity, ranks, element types, shape
/// relations) is one the operation accepts, and `scratch_bytes` sizes
/// any working memory the operation would need. No numeric execution
/// happens through this trait.
///
/// # Object safety
///
/// The trait is object-safe; the resolver stores kernels as
/// `Box<dyn Kernel>`.
pub trait Kernel: Send + 'static {
    /// The operation kind this kernel implements.
    fn op(&self) -> OpKind;

    /// Human-readable name for error reporting.
    ///
    /// Defaults to the operation's wire name.
    fn name(&self) -> &'static str {
        self.op().name()
    }

    /// Check an operator's tensor signature against this operation's
    /// requirements.
    fn validate(&self, invocation: &OpInvocation<'_>) -> Result<(), KernelError>;

    /// Scratch memory required in bytes for this invocation.
    ///
    /// Counted against the arena budget at load time. Default: none.
    fn scratch_bytes(&self, _invocation: &OpInvocation<'_>) -> usize {
        0
    }
}
