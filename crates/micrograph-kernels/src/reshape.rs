//! Reshaping a tensor without changing its element count.

use micrograph_core::{ElementType, KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `reshape` operation.
///
/// Signature: `(input[, new_shape]) -> output`. The optional second
/// input is a rank-1 i32 tensor carrying the target shape; models that
/// bake the target shape into the output definition omit it. Either
/// way, the output must hold exactly as many elements as the input.
#[derive(Debug, Default)]
pub struct ReshapeKernel;

impl Kernel for ReshapeKernel {
    fn op(&self) -> OpKind {
        OpKind::Reshape
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if !(1..=2).contains(&inv.inputs.len()) || inv.outputs.len() != 1 {
            return Err(checks::arity_error(
                inv,
                "1-2 inputs (input, optional new shape), 1 output",
            ));
        }
        let (input, output) = (inv.inputs[0], inv.outputs[0]);
        if let Some(new_shape) = inv.input(1) {
            checks::expect_element_type(new_shape, ElementType::I32)?;
            checks::expect_rank(new_shape, 1)?;
        }
        checks::expect_matching_element_types(input, output)?;
        checks::expect_same_element_count(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micrograph_core::TensorDef;

    #[test]
    fn accepts_count_preserving_reshape() {
        let input = TensorDef::new("in", ElementType::F32, &[1, 42, 48, 18]);
        let output = TensorDef::new("boxes", ElementType::F32, &[1, 2016, 18]);
        let inv = OpInvocation::new(0, &[&input], &[&output]);
        assert!(ReshapeKernel.validate(&inv).is_ok());
    }

    #[test]
    fn accepts_explicit_shape_tensor() {
        let input = TensorDef::new("in", ElementType::F32, &[6, 4]);
        let new_shape = TensorDef::new("shape", ElementType::I32, &[2]);
        let output = TensorDef::new("out", ElementType::F32, &[8, 3]);
        let inv = OpInvocation::new(0, &[&input, &new_shape], &[&output]);
        assert!(ReshapeKernel.validate(&inv).is_ok());
    }

    #[test]
    fn rejects_element_count_change() {
        let input = TensorDef::new("in", ElementType::F32, &[6, 4]);
        let output = TensorDef::new("out", ElementType::F32, &[5, 5]);
        let inv = OpInvocation::new(0, &[&input], &[&output]);
        assert_eq!(
            ReshapeKernel.validate(&inv),
            Err(KernelError::ElementCountMismatch {
                input: 24,
                output: 25
            })
        );
    }

    #[test]
    fn rejects_f32_shape_tensor() {
        let input = TensorDef::new("in", ElementType::F32, &[6, 4]);
        let new_shape = TensorDef::new("shape", ElementType::F32, &[2]);
        let output = TensorDef::new("out", ElementType::F32, &[4, 6]);
        let inv = OpInvocation::new(0, &[&input, &new_shape], &[&output]);
        assert!(matches!(
            ReshapeKernel.validate(&inv),
            Err(KernelError::ElementTypeMismatch { .. })
        ));
    }
}
