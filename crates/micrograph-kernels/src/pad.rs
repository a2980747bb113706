//! Tensor padding with an explicit per-dimension padding table.

use micrograph_core::{ElementType, KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `pad` operation.
///
/// Signature: `(input, paddings) -> output`. The paddings tensor is
/// i32 with shape `[rank, 2]`, giving before/after padding for each
/// input dimension. Padding can only grow a tensor, so every output
/// extent must be at least the matching input extent.
#[derive(Debug, Default)]
pub struct PadKernel;

impl Kernel for PadKernel {
    fn op(&self) -> OpKind {
        OpKind::Pad
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if inv.inputs.len() != 2 || inv.outputs.len() != 1 {
            return Err(checks::arity_error(inv, "2 inputs (input, paddings), 1 output"));
        }
        let (input, paddings, output) = (inv.inputs[0], inv.inputs[1], inv.outputs[0]);
        checks::expect_element_type(paddings, ElementType::I32)?;
        checks::expect_rank(paddings, 2)?;
        if paddings.shape[0] as usize != input.rank() || paddings.shape[1] != 2 {
            return Err(KernelError::ShapeMismatch {
                detail: format!(
                    "paddings {paddings} must be [{}, 2] for input {input}",
                    input.rank()
                ),
            });
        }
        checks::expect_matching_element_types(input, output)?;
        if output.rank() != input.rank() {
            return Err(KernelError::RankMismatch {
                tensor: output.name.clone(),
                expected: input.rank(),
                found: output.rank(),
            });
        }
        for (i, (&in_d, &out_d)) in input.shape.iter().zip(output.shape.iter()).enumerate() {
            if out_d < in_d {
                return Err(KernelError::ShapeMismatch {
                    detail: format!(
                        "padding cannot shrink dimension {i} from {in_d} to {out_d}"
                    ),
                });
            }
        }
        Ok(())
    }
}
