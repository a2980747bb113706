//! Shared signature checks used by the builtin kernels.

use micrograph_core::{ElementType, KernelError, TensorDef};
use micrograph_kernel::OpInvocation;

/// Build an arity error describing what the kernel expects.
pub(crate) fn arity_error(inv: &OpInvocation<'_>, expected: &str) -> KernelError {
    KernelError::ArityMismatch {
        expected: expected.to_string(),
        inputs: inv.inputs.len(),
        outputs: inv.outputs.len(),
    }
}

/// Require an exact rank.
pub(crate) fn expect_rank(def: &TensorDef, expected: usize) -> Result<(), KernelError> {
    if def.rank() == expected {
        Ok(())
    } else {
        Err(KernelError::RankMismatch {
            tensor: def.name.clone(),
            expected,
            found: def.rank(),
        })
    }
}

/// Require an exact element type.
pub(crate) fn expect_element_type(
    def: &TensorDef,
    expected: ElementType,
) -> Result<(), KernelError> {
    if def.element_type == expected {
        Ok(())
    } else {
        Err(KernelError::ElementTypeMismatch {
            tensor: def.name.clone(),
            expected,
            found: def.element_type,
        })
    }
}

/// Require two tensors to share an element type. The first tensor sets
/// the expectation.
pub(crate) fn expect_matching_element_types(
    reference: &TensorDef,
    other: &TensorDef,
) -> Result<(), KernelError> {
    expect_element_type(other, reference.element_type)
}

/// Require identical shapes.
pub(crate) fn expect_same_shape(a: &TensorDef, b: &TensorDef) -> Result<(), KernelError> {
    if a.shape == b.shape {
        Ok(())
    } else {
        Err(KernelError::ShapeMismatch {
            detail: format!("{a} and {b} must have identical shapes"),
        })
    }
}

/// Require identical element counts between an input and an output.
pub(crate) fn expect_same_element_count(
    input: &TensorDef,
    output: &TensorDef,
) -> Result<(), KernelError> {
    let count = |def: &TensorDef| {
        def.element_count().ok_or_else(|| KernelError::ShapeMismatch {
            detail: format!("{def} element count overflows u64"),
        })
    };
    let (i, o) = (count(input)?, count(output)?);
    if i == o {
        Ok(())
    } else {
        Err(KernelError::ElementCountMismatch { input: i, output: o })
    }
}

/// Require a specific extent at one dimension to carry over from input
/// to output (used for batch and channel preservation).
pub(crate) fn expect_extent_preserved(
    input: &TensorDef,
    output: &TensorDef,
    dim: usize,
    what: &str,
) -> Result<(), KernelError> {
    if input.shape.get(dim) == output.shape.get(dim) {
        Ok(())
    } else {
        Err(KernelError::ShapeMismatch {
            detail: format!("{what} extent must carry over from {input} to {output}"),
        })
    }
}
