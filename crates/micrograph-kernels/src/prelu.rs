//! Parametric ReLU: activation with a learned per-channel alpha tensor.

use micrograph_core::{KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `prelu` operation.
///
/// Signature: `(input, alpha) -> output`. The alpha tensor holds the
/// learned negative-slope parameters and must share the input's element
/// type; the output mirrors the input exactly.
#[derive(Debug, Default)]
pub struct PreluKernel;

impl Kernel for PreluKernel {
    fn op(&self) -> OpKind {
        OpKind::Prelu
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if inv.inputs.len() != 2 || inv.outputs.len() != 1 {
            return Err(checks::arity_error(inv, "2 inputs (input, alpha), 1 output"));
        }
        let (input, alpha, output) = (inv.inputs[0], inv.inputs[1], inv.outputs[0]);
        checks::expect_matching_element_types(input, alpha)?;
        checks::expect_matching_element_types(input, output)?;
        checks::expect_same_shape(input, output)
    }
}
