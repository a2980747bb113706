//! The supported-operation enum and the [`OpSet`] bitset.

use std::fmt;

/// The closed set of operations the bootstrap can resolve.
///
/// These are the nine kernels the target palm-detection model requires.
/// Operator names in a model buffer are matched against
/// [`OpKind::from_name`]; anything else is an unknown operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OpKind {
    /// Parametric rectified-linear activation.
    Prelu = 0,
    /// Depthwise 2-D convolution.
    DepthwiseConv2d = 1,
    /// Standard 2-D convolution.
    Conv2d = 2,
    /// Elementwise addition.
    Add = 3,
    /// Quantized-to-float conversion.
    Dequantize = 4,
    /// 2-D max pooling.
    MaxPool2d = 5,
    /// Spatial padding.
    Pad = 6,
    /// Bilinear resize.
    ResizeBilinear = 7,
    /// Reshape (element count preserving).
    Reshape = 8,
}

impl OpKind {
    /// All supported operations, in registration order.
    pub const ALL: [OpKind; 9] = [
        OpKind::Prelu,
        OpKind::DepthwiseConv2d,
        OpKind::Conv2d,
        OpKind::Add,
        OpKind::Dequantize,
        OpKind::MaxPool2d,
        OpKind::Pad,
        OpKind::ResizeBilinear,
        OpKind::Reshape,
    ];

    /// Stable wire name of this operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Prelu => "prelu",
            Self::DepthwiseConv2d => "depthwise_conv_2d",
            Self::Conv2d => "conv_2d",
            Self::Add => "add",
            Self::Dequantize => "dequantize",
            Self::MaxPool2d => "max_pool_2d",
            Self::Pad => "pad",
            Self::ResizeBilinear => "resize_bilinear",
            Self::Reshape => "reshape",
        }
    }

    /// Parse a wire name. Returns `None` for unsupported operations.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`OpKind`]s implemented as a fixed-width bitset.
///
/// Used to express the subset check between the operations a model
/// requires and the kernels a resolver has registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpSet(u16);

impl OpSet {
    /// Create an empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// The set of all supported operations.
    pub fn all() -> Self {
        OpKind::ALL.into_iter().collect()
    }

    /// Insert an operation into the set.
    pub fn insert(&mut self, op: OpKind) {
        self.0 |= op.bit();
    }

    /// Check whether the set contains an operation.
    pub fn contains(&self, op: OpKind) -> bool {
        self.0 & op.bit() != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Return the intersection of two sets (`self & other`).
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Check whether `self` is a subset of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if the set contains no operations.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of operations in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the operations in the set, in `OpKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = OpKind> + '_ {
        OpKind::ALL.into_iter().filter(|op| self.contains(*op))
    }
}

impl FromIterator<OpKind> for OpSet {
    fn from_iter<I: IntoIterator<Item = OpKind>>(iter: I) -> Self {
        let mut set = Self::empty();
        for op in iter {
            set.insert(op);
        }
        set
    }
}
