//! Depthwise 2-D convolution: one filter per input channel.

use micrograph_core::{KernelError, OpKind};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::conv2d::{patch_scratch_bytes, validate_conv};

/// Kernel for the `depthwise_conv_2d` operation.
///
/// Same signature as `conv_2d`, but the filter layout is
/// `[1, kh, kw, channels]`: the trailing filter extent, not the
/// leading one, must match the output channel count.
#[derive(Debug, Default)]
pub struct DepthwiseConv2dKernel;

impl Kernel for DepthwiseConv2dKernel {
    fn op(&self) -> OpKind {
        OpKind::DepthwiseConv2d
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        validate_conv(inv, |filter| filter.shape.get(3).copied())
    }

    fn scratch_bytes(&self, inv: &OpInvocation<'_>) -> usize {
        patch_scratch_bytes(inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micrograph_core::{ElementType, TensorDef};

    fn f32_t(name: &str, dims: &[u32]) -> TensorDef {
        TensorDef::new(name, ElementType::F32, dims)
    }

    #[test]
    fn accepts_depthwise_layout() {
        let input = f32_t("in", &[1, 48, 48, 16]);
        let filter = f32_t("w", &[1, 3, 3, 16]);
        let bias = f32_t("b", &[16]);
        let output = f32_t("out", &[1, 48, 48, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter, &bias], &[&output]);
        assert!(DepthwiseConv2dKernel.validate(&inv).is_ok());
    }

    #[test]
    fn channel_count_comes_from_trailing_filter_extent() {
        // An OHWI conv filter must not pass the depthwise check.
        let input = f32_t("in", &[1, 48, 48, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let output = f32_t("out", &[1, 48, 48, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter], &[&output]);
        assert!(matches!(
            DepthwiseConv2dKernel.validate(&inv),
            Err(KernelError::ShapeMismatch { .. })
        ));
    }
}
