//! 2-D max pooling over NHWC activations.

use micrograph_core::{KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `max_pool_2d` operation.
///
/// Signature: `(input) -> output`, both 4-D NHWC with matching element
/// types. Pooling reduces spatial extents only, so batch and channel
/// extents carry over and the output's height and width may not exceed
/// the input's.
#[derive(Debug, Default)]
pub struct MaxPool2dKernel;

impl Kernel for MaxPool2dKernel {
    fn op(&self) -> OpKind {
        OpKind::MaxPool2d
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if inv.inputs.len() != 1 || inv.outputs.len() != 1 {
            return Err(checks::arity_error(inv, "1 input, 1 output"));
        }
        let (input, output) = (inv.inputs[0], inv.outputs[0]);
        checks::expect_rank(input, 4)?;
        checks::expect_rank(output, 4)?;
        checks::expect_matching_element_types(input, output)?;
        checks::expect_extent_preserved(input, output, 0, "batch")?;
        checks::expect_extent_preserved(input, output, 3, "channel")?;
        for dim in [1, 2] {
            if output.shape[dim] > input.shape[dim] {
                return Err(KernelError::ShapeMismatch {
                    detail: format!("pooling cannot grow {input} to {output}"),
                });
            }
        }
        Ok(())
    }
}
