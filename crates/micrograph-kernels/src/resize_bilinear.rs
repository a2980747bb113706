//! Bilinear resizing of NHWC activations.

use micrograph_core::{ElementType, KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `resize_bilinear` operation.
///
/// Signature: `(input, size) -> output`. The size tensor is i32 with
/// two elements (target height and width). Input and output are 4-D
/// NHWC; resizing only changes spatial extents, so batch and channel
/// extents carry over.
#[derive(Debug, Default)]
pub struct ResizeBilinearKernel;

impl Kernel for ResizeBilinearKernel {
    fn op(&self) -> OpKind {
        OpKind::ResizeBilinear
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if inv.inputs.len() != 2 || inv.outputs.len() != 1 {
            return Err(checks::arity_error(inv, "2 inputs (input, size), 1 output"));
        }
        let (input, size, output) = (inv.inputs[0], inv.inputs[1], inv.outputs[0]);
        checks::expect_element_type(size, ElementType::I32)?;
        checks::expect_rank(size, 1)?;
        if size.shape[0] != 2 {
            return Err(KernelError::ShapeMismatch {
                detail: format!("size {size} must hold exactly [height, width]"),
            });
        }
        checks::expect_rank(input, 4)?;
        checks::expect_rank(output, 4)?;
        checks::expect_matching_element_types(input, output)?;
        checks::expect_extent_preserved(input, output, 0, "batch")?;
        checks::expect_extent_preserved(input, output, 3, "channel")
    }

    /// Two source rows of interpolation state: `2 * width * channels`.
    fn scratch_bytes(&self, inv: &OpInvocation<'_>) -> usize {
        match inv.input(0) {
            Some(input) if input.rank() == 4 => {
                2 * input.shape[2] as usize * input.shape[3] as usize * 4
            }
            _ => 0,
        }
    }
}
