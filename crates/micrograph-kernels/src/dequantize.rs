//! Dequantization from an integer representation to f32.

use micrograph_core::{ElementType, KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `dequantize` operation.
///
/// Signature: `(input) -> output` where the input carries a quantized
/// integer type (i8, u8, or i32) and the output is f32 with the same
/// shape.
#[derive(Debug, Default)]
pub struct DequantizeKernel;

impl Kernel for DequantizeKernel {
    fn op(&self) -> OpKind {
        OpKind::Dequantize
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if inv.inputs.len() != 1 || inv.outputs.len() != 1 {
            return Err(checks::arity_error(inv, "1 input, 1 output"));
        }
        let (input, output) = (inv.inputs[0], inv.outputs[0]);
        if !input.element_type.is_quantized() {
            return Err(KernelError::UnsupportedElementType {
                tensor: input.name.clone(),
                found: input.element_type,
            });
        }
        checks::expect_element_type(output, ElementType::F32)?;
        checks::expect_same_shape(input, output)
    }
}
