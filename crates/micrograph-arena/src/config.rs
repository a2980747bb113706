//! Arena configuration parameters.

/// Configuration for the tensor arena.
///
/// The only tunable is the byte budget. Models whose tensors (plus
/// kernel scratch) do not fit the budget are rejected at load time
/// rather than allocating lazily later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total arena capacity in bytes.
    ///
    /// Default: 3_500_000. Sized for a palm-detection model with
    /// comfortable headroom; smaller targets can shrink this to match
    /// their memory budget.
    pub capacity_bytes: usize,
}

impl ArenaConfig {
    /// Default arena capacity in bytes.
    pub const DEFAULT_CAPACITY_BYTES: usize = 3_500_000;

    /// Create a config with the given byte budget.
    pub fn new(capacity_bytes: usize) -> Self {
        Self { capacity_bytes }
    }

    /// Capacity in 4-byte slots, rounding partial slots up.
    pub fn slot_capacity(&self) -> usize {
        self.capacity_bytes.div_ceil(std::mem::size_of::<f32>())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_BYTES)
    }
}
