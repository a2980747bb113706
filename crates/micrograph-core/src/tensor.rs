//! Tensor descriptors: element types, shapes, and the [`TensorDef`] record.

use smallvec::SmallVec;
use std::fmt;

/// A tensor shape: per-dimension extents, outermost first.
///
/// Uses `SmallVec<[u32; 4]>` to avoid heap allocation for tensors up to
/// 4-D, covering every tensor in the target models (NHWC activations,
/// OHWI filters, 1-D bias vectors). Higher ranks spill to the heap
/// transparently. An empty shape denotes a scalar.
pub type Shape = SmallVec<[u32; 4]>;

/// Maximum tensor rank accepted by [`TensorDef::validate`].
pub const MAX_RANK: usize = 8;

/// Classification of a tensor's element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit IEEE-754 float.
    F32,
    /// Signed 8-bit integer (quantized data).
    I8,
    /// Unsigned 8-bit integer (quantized data).
    U8,
    /// Signed 32-bit integer (shapes, paddings, sizes).
    I32,
}

impl ElementType {
    /// Storage size of one element in bytes.
    pub fn byte_size(self) -> usize {
        match self {
            Self::F32 | Self::I32 => 4,
            Self::I8 | Self::U8 => 1,
        }
    }

    /// Whether this is a quantized integer type convertible by `dequantize`.
    pub fn is_quantized(self) -> bool {
        matches!(self, Self::I8 | Self::U8 | Self::I32)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::F32 => "f32",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I32 => "i32",
        };
        write!(f, "{s}")
    }
}

/// Definition of a tensor listed in a model's tensor table.
///
/// Describes storage only — name, element type, and shape. Tensor data
/// lives in the arena once an interpreter has laid the model out;
/// weight payloads live in the model's opaque weight blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorDef {
    /// Human-readable name for diagnostics (e.g. `"detection_boxes"`).
    pub name: String,
    /// Element storage type.
    pub element_type: ElementType,
    /// Per-dimension extents, outermost first. Empty for scalars.
    pub shape: Shape,
}

impl TensorDef {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, element_type: ElementType, dims: &[u32]) -> Self {
        Self {
            name: name.into(),
            element_type,
            shape: dims.iter().copied().collect(),
        }
    }

    /// Tensor rank (number of dimensions).
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements, or `None` on multiplication overflow.
    ///
    /// A scalar (empty shape) has one element.
    pub fn element_count(&self) -> Option<u64> {
        self.shape
            .iter()
            .try_fold(1u64, |acc, &d| acc.checked_mul(u64::from(d)))
    }

    /// Total storage size in bytes, or `None` on overflow.
    pub fn byte_len(&self) -> Option<u64> {
        self.element_count()?
            .checked_mul(self.element_type.byte_size() as u64)
    }

    /// Structural validation: rank within bounds, no zero-extent
    /// dimensions, element count representable.
    pub fn validate(&self) -> Result<(), String> {
        if self.rank() > MAX_RANK {
            return Err(format!(
                "tensor '{}' has rank {} (maximum {MAX_RANK})",
                self.name,
                self.rank(),
            ));
        }
        if self.shape.iter().any(|&d| d == 0) {
            return Err(format!("tensor '{}' has a zero-extent dimension", self.name));
        }
        if self.byte_len().is_none() {
            return Err(format!("tensor '{}' byte length overflows u64", self.name));
        }
        Ok(())
    }
}

impl fmt::Display for TensorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}[", self.name, self.element_type)?;
        for (i, d) in self.shape.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}
