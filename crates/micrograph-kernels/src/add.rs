//! Elementwise addition of two tensors of identical shape.

use micrograph_core::{KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `add` operation.
///
/// Signature: `(lhs, rhs) -> output`. All three tensors share one
/// element type and one shape. Broadcasting is not supported; the
/// target models only add residual branches of equal shape.
#[derive(Debug, Default)]
pub struct AddKernel;

impl Kernel for AddKernel {
    fn op(&self) -> OpKind {
        OpKind::Add
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        if inv.inputs.len() != 2 || inv.outputs.len() != 1 {
            return Err(checks::arity_error(inv, "2 inputs, 1 output"));
        }
        let (lhs, rhs, output) = (inv.inputs[0], inv.inputs[1], inv.outputs[0]);
        checks::expect_matching_element_types(lhs, rhs)?;
        checks::expect_matching_element_types(lhs, output)?;
        checks::expect_same_shape(lhs, rhs)?;
        checks::expect_same_shape(lhs, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micrograph_core::{ElementType, TensorDef};

    fn t(name: &str, et: ElementType, dims: &[u32]) -> TensorDef {
        TensorDef::new(name, et, dims)
    }

    #[test]
    fn accepts_equal_shapes() {
        let a = t("a", ElementType::F32, &[1, 24, 24, 8]);
        let b = t("b", ElementType::F32, &[1, 24, 24, 8]);
        let out = t("out", ElementType::F32, &[1, 24, 24, 8]);
        let inv = OpInvocation::new(0, &[&a, &b], &[&out]);
        assert!(AddKernel.validate(&inv).is_ok());
    }

    #[test]
    fn rejects_broadcast_shapes() {
        let a = t("a", ElementType::F32, &[1, 24, 24, 8]);
        let b = t("b", ElementType::F32, &[8]);
        let out = t("out", ElementType::F32, &[1, 24, 24, 8]);
        let inv = OpInvocation::new(0, &[&a, &b], &[&out]);
        assert!(matches!(
            AddKernel.validate(&inv),
            Err(KernelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_mixed_element_types() {
        let a = t("a", ElementType::F32, &[16]);
        let b = t("b", ElementType::I8, &[16]);
        let out = t("out", ElementType::F32, &[16]);
        let inv = OpInvocation::new(0, &[&a, &b], &[&out]);
        assert!(matches!(
            AddKernel.validate(&inv),
            Err(KernelError::ElementTypeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_extra_output() {
        let a = t("a", ElementType::F32, &[16]);
        let out = t("out", ElementType::F32, &[16]);
        let inv = OpInvocation::new(0, &[&a, &a], &[&out, &out]);
        assert!(matches!(
            AddKernel.validate(&inv),
            Err(KernelError::ArityMismatch { outputs: 2, .. })
        ));
    }
}
