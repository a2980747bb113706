//! 2-D convolution over NHWC activations with an OHWI filter.

use micrograph_core::{KernelError, OpKind, TensorDef};
use micrograph_kernel::{Kernel, OpInvocation};

use crate::checks;

/// Kernel for the `conv_2d` operation.
///
/// Signature: `(input, filter[, bias]) -> output`.
///
/// - `input` and `output` are 4-D NHWC activations.
/// - `filter` is 4-D OHWI: `[out_channels, kh, kw, in_channels]`.
/// - `bias` is optional, rank 1, one value per output channel.
///
/// The output channel extent must equal the filter's leading extent,
/// and the batch extent carries over from input to output. Spatial
/// extents are not re-derived here; stride and padding parameters live
/// in the weight blob, which this bootstrap treats as opaque.
#[derive(Debug, Default)]
pub struct Conv2dKernel;

/// Shared signature check for ordinary and depthwise convolution.
///
/// `channel_extent` extracts the filter extent that must match the
/// output channel count.
pub(crate) fn validate_conv(
    inv: &OpInvocation<'_>,
    channel_extent: fn(&TensorDef) -> Option<u32>,
) -> Result<(), KernelError> {
    if !(2..=3).contains(&inv.inputs.len()) || inv.outputs.len() != 1 {
        return Err(checks::arity_error(
            inv,
            "2-3 inputs (input, filter, optional bias), 1 output",
        ));
    }
    let (input, filter, output) = (inv.inputs[0], inv.inputs[1], inv.outputs[0]);
    checks::expect_rank(input, 4)?;
    checks::expect_rank(filter, 4)?;
    checks::expect_rank(output, 4)?;
    checks::expect_matching_element_types(input, output)?;
    checks::expect_extent_preserved(input, output, 0, "batch")?;

    let out_channels = output.shape[3];
    if channel_extent(filter) != Some(out_channels) {
        return Err(KernelError::ShapeMismatch {
            detail: format!(
                "filter {filter} does not produce the {out_channels} channels of {output}"
            ),
        });
    }
    if let Some(bias) = inv.input(2) {
        checks::expect_rank(bias, 1)?;
        if bias.shape[0] != out_channels {
            return Err(KernelError::ShapeMismatch {
                detail: format!("bias {bias} must have one value per output channel ({out_channels})"),
            });
        }
    }
    Ok(())
}

/// Scratch for one im2col patch: `kh * kw * in_channels` f32 values.
pub(crate) fn patch_scratch_bytes(inv: &OpInvocation<'_>) -> usize {
    match inv.input(1) {
        Some(filter) if filter.rank() == 4 => {
            filter.shape[1] as usize * filter.shape[2] as usize * filter.shape[3] as usize * 4
        }
        _ => 0,
    }
}

impl Kernel for Conv2dKernel {
    fn op(&self) -> OpKind {
        OpKind::Conv2d
    }

    fn validate(&self, inv: &OpInvocation<'_>) -> Result<(), KernelError> {
        validate_conv(inv, |filter| filter.shape.first().copied())
    }

    fn scratch_bytes(&self, inv: &OpInvocation<'_>) -> usize {
        patch_scratch_bytes(inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micrograph_core::ElementType;

    fn f32_t(name: &str, dims: &[u32]) -> TensorDef {
        TensorDef::new(name, ElementType::F32, dims)
    }

    #[test]
    fn accepts_conv_with_bias() {
        let input = f32_t("in", &[1, 96, 96, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let bias = f32_t("b", &[16]);
        let output = f32_t("out", &[1, 48, 48, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter, &bias], &[&output]);
        assert!(Conv2dKernel.validate(&inv).is_ok());
    }

    #[test]
    fn accepts_conv_without_bias() {
        let input = f32_t("in", &[1, 96, 96, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let output = f32_t("out", &[1, 96, 96, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter], &[&output]);
        assert!(Conv2dKernel.validate(&inv).is_ok());
    }

    #[test]
    fn rejects_channel_mismatch() {
        let input = f32_t("in", &[1, 96, 96, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let output = f32_t("out", &[1, 96, 96, 32]);
        let inv = OpInvocation::new(0, &[&input, &filter], &[&output]);
        assert!(matches!(
            Conv2dKernel.validate(&inv),
            Err(KernelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_non_4d_input() {
        let input = f32_t("in", &[96, 96, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let output = f32_t("out", &[1, 96, 96, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter], &[&output]);
        assert!(matches!(
            Conv2dKernel.validate(&inv),
            Err(KernelError::RankMismatch { found: 3, .. })
        ));
    }

    #[test]
    fn rejects_bias_of_wrong_length() {
        let input = f32_t("in", &[1, 96, 96, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let bias = f32_t("b", &[8]);
        let output = f32_t("out", &[1, 96, 96, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter, &bias], &[&output]);
        assert!(Conv2dKernel.validate(&inv).is_err());
    }

    #[test]
    fn scratch_sizes_one_patch() {
        let input = f32_t("in", &[1, 96, 96, 8]);
        let filter = f32_t("w", &[16, 3, 3, 8]);
        let output = f32_t("out", &[1, 96, 96, 16]);
        let inv = OpInvocation::new(0, &[&input, &filter], &[&output]);
        assert_eq!(Conv2dKernel.scratch_bytes(&inv), 3 * 3 * 8 * 4);
    }
}
