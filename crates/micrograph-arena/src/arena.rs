//! The tensor arena allocator.

use indexmap::IndexMap;
use micrograph_core::TensorId;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

const SLOT_BYTES: usize = std::mem::size_of::<f32>();

/// Heap-owned bump allocator for tensor storage.
///
/// All regions are carved out of one contiguous `Vec<f32>` allocated up
/// front at the configured capacity. Allocation only moves a cursor
/// forward; nothing is ever freed individually, and regions never move,
/// so offsets recorded at load time stay valid for the arena's whole
/// lifetime.
///
/// Byte sizes are rounded up to whole 4-byte slots, so a 6-byte `i8`
/// tensor occupies 2 slots. The waste is bounded by 3 bytes per tensor.
pub struct TensorArena {
    /// Contiguous storage for all tensor regions.
    data: Vec<f32>,
    /// Maps TensorId to (offset, len) in slots within `data`.
    regions: IndexMap<TensorId, (usize, usize)>,
    /// Next free slot.
    cursor: usize,
    /// Slots reserved for kernel scratch space, counted against the
    /// budget but not addressable through a tensor ID.
    scratch_slots: usize,
}

impl TensorArena {
    /// Create an arena with the configured byte budget.
    ///
    /// The full backing storage is allocated immediately and
    /// zero-initialised; later allocations never touch the heap.
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            data: vec![0.0; config.slot_capacity()],
            regions: IndexMap::new(),
            cursor: 0,
            scratch_slots: 0,
        }
    }

    /// Create an arena with an explicit byte capacity.
    pub fn with_byte_capacity(capacity_bytes: usize) -> Self {
        Self::new(&ArenaConfig::new(capacity_bytes))
    }

    /// Allocate a region of `byte_len` bytes for a tensor.
    ///
    /// Rounds up to whole slots. A zero-byte request is rejected as
    /// capacity-exceeded only when the arena itself has zero capacity;
    /// otherwise it yields an empty region, which keeps degenerate
    /// tensors addressable.
    pub fn allocate(&mut self, tensor: TensorId, byte_len: usize) -> Result<(), ArenaError> {
        if self.regions.contains_key(&tensor) {
            return Err(ArenaError::DuplicateTensor { tensor });
        }
        let slots = byte_len.div_ceil(SLOT_BYTES);
        let new_cursor = self
            .cursor
            .checked_add(slots)
            .ok_or(ArenaError::CapacityExceeded {
                requested: byte_len,
                capacity: self.capacity_bytes(),
            })?;
        if new_cursor.saturating_add(self.scratch_slots) > self.data.len() {
            return Err(ArenaError::CapacityExceeded {
                requested: byte_len,
                capacity: self.capacity_bytes(),
            });
        }
        self.regions.insert(tensor, (self.cursor, slots));
        self.cursor = new_cursor;
        Ok(())
    }

    /// Reserve scratch space for kernel working memory.
    ///
    /// Scratch is carved from the top of the arena: it counts against
    /// the budget but has no tensor ID and is never handed out as a
    /// region. Calls accumulate; callers sharing scratch between users
    /// should reserve their single worst case once.
    pub fn reserve_scratch(&mut self, byte_len: usize) -> Result<(), ArenaError> {
        let slots = byte_len.div_ceil(SLOT_BYTES);
        let new_scratch = self
            .scratch_slots
            .checked_add(slots)
            .ok_or(ArenaError::CapacityExceeded {
                requested: byte_len,
                capacity: self.capacity_bytes(),
            })?;
        if self.cursor.saturating_add(new_scratch) > self.data.len() {
            return Err(ArenaError::CapacityExceeded {
                requested: byte_len,
                capacity: self.capacity_bytes(),
            });
        }
        self.scratch_slots = new_scratch;
        Ok(())
    }

    /// Read a tensor's region.
    pub fn region(&self, tensor: TensorId) -> Option<&[f32]> {
        let &(offset, len) = self.regions.get(&tensor)?;
        Some(&self.data[offset..offset + len])
    }

    /// Mutably access a tensor's region.
    pub fn region_mut(&mut self, tensor: TensorId) -> Option<&mut [f32]> {
        let &(offset, len) = self.regions.get(&tensor)?;
        Some(&mut self.data[offset..offset + len])
    }

    /// Whether a tensor has an allocated region.
    pub fn contains(&self, tensor: TensorId) -> bool {
        self.regions.contains_key(&tensor)
    }

    /// The (offset, len) of a tensor's region, in slots.
    pub fn region_location(&self, tensor: TensorId) -> Option<(usize, usize)> {
        self.regions.get(&tensor).copied()
    }

    /// Bytes consumed so far, tensor regions plus scratch.
    pub fn used_bytes(&self) -> usize {
        (self.cursor + self.scratch_slots) * SLOT_BYTES
    }

    /// Total capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.data.len() * SLOT_BYTES
    }

    /// Bytes reserved for kernel scratch.
    pub fn scratch_bytes(&self) -> usize {
        self.scratch_slots * SLOT_BYTES
    }

    /// Bytes still available for allocation.
    pub fn remaining_bytes(&self) -> usize {
        self.capacity_bytes() - self.used_bytes()
    }

    /// Number of allocated tensor regions.
    pub fn tensor_count(&self) -> usize {
        self.regions.len()
    }

    /// Drop every region and reservation, zeroing the backing storage.
    ///
    /// Capacity is unchanged; the arena is ready for a fresh layout.
    pub fn reset(&mut self) {
        self.data.fill(0.0);
        self.regions.clear();
        self.cursor = 0;
        self.scratch_slots = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_returns_zeroed_region() {
        let mut arena = TensorArena::with_byte_capacity(1024);
        arena.allocate(TensorId(0), 400).unwrap();
        let region = arena.region(TensorId(0)).unwrap();
        assert_eq!(region.len(), 100);
        assert!(region.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn regions_dont_overlap() {
        let mut arena = TensorArena::with_byte_capacity(1024);
        arena.allocate(TensorId(0), 40).unwrap();
        arena.allocate(TensorId(1), 20).unwrap();
        arena.region_mut(TensorId(0)).unwrap().fill(1.0);
        arena.region_mut(TensorId(1)).unwrap().fill(2.0);
        assert!(arena.region(TensorId(0)).unwrap().iter().all(|&v| v == 1.0));
        assert!(arena.region(TensorId(1)).unwrap().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn byte_lengths_round_up_to_slots() {
        let mut arena = TensorArena::with_byte_capacity(1024);
        arena.allocate(TensorId(0), 6).unwrap();
        assert_eq!(arena.region(TensorId(0)).unwrap().len(), 2);
        assert_eq!(arena.region_location(TensorId(1)), None);
        arena.allocate(TensorId(1), 1).unwrap();
        // The second region starts right after the rounded first one.
        assert_eq!(arena.region_location(TensorId(1)), Some((2, 1)));
    }

    #[test]
    fn duplicate_tensor_rejected() {
        let mut arena = TensorArena::with_byte_capacity(1024);
        arena.allocate(TensorId(3), 8).unwrap();
        assert_eq!(
            arena.allocate(TensorId(3), 8),
            Err(ArenaError::DuplicateTensor { tensor: TensorId(3) })
        );
        // The original region is untouched.
        assert_eq!(arena.region(TensorId(3)).unwrap().len(), 2);
    }

    #[test]
    fn capacity_exceeded_reports_request_and_budget() {
        let mut arena = TensorArena::with_byte_capacity(100);
        match arena.allocate(TensorId(0), 200) {
            Err(ArenaError::CapacityExceeded {
                requested,
                capacity,
            }) => {
                assert_eq!(requested, 200);
                assert_eq!(capacity, 100);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        // A failed allocation leaves no region behind.
        assert!(!arena.contains(TensorId(0)));
        assert_eq!(arena.used_bytes(), 0);
    }

    #[test]
    fn scratch_counts_against_budget() {
        let mut arena = TensorArena::with_byte_capacity(100);
        arena.reserve_scratch(60).unwrap();
        assert_eq!(arena.scratch_bytes(), 60);
        assert_eq!(arena.used_bytes(), 60);
        assert!(arena.allocate(TensorId(0), 60).is_err());
        arena.allocate(TensorId(0), 40).unwrap();
        assert_eq!(arena.used_bytes(), 100);
    }

    #[test]
    fn scratch_reservations_accumulate() {
        let mut arena = TensorArena::with_byte_capacity(100);
        arena.reserve_scratch(20).unwrap();
        arena.reserve_scratch(20).unwrap();
        assert_eq!(arena.scratch_bytes(), 40);
        assert!(arena.reserve_scratch(80).is_err());
        assert_eq!(arena.scratch_bytes(), 40);
    }

    #[test]
    fn zero_byte_allocation_is_valid() {
        let mut arena = TensorArena::with_byte_capacity(100);
        arena.allocate(TensorId(0), 0).unwrap();
        assert!(arena.region(TensorId(0)).unwrap().is_empty());
        assert_eq!(arena.used_bytes(), 0);
    }

    #[test]
    fn reset_clears_layout_but_keeps_capacity() {
        let mut arena = TensorArena::with_byte_capacity(100);
        arena.allocate(TensorId(0), 40).unwrap();
        arena.region_mut(TensorId(0)).unwrap().fill(1.0);
        arena.reserve_scratch(20).unwrap();
        assert_eq!(arena.remaining_bytes(), 40);

        arena.reset();
        assert_eq!(arena.used_bytes(), 0);
        assert_eq!(arena.tensor_count(), 0);
        assert_eq!(arena.remaining_bytes(), 100);
        assert!(!arena.contains(TensorId(0)));

        // Storage is zeroed for the next layout.
        arena.allocate(TensorId(1), 40).unwrap();
        assert!(arena.region(TensorId(1)).unwrap().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn unknown_tensor_returns_none() {
        let arena = TensorArena::with_byte_capacity(100);
        assert!(arena.region(TensorId(42)).is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Sequential allocations never overlap and appear in
            /// insertion order.
            #[test]
            fn regions_are_disjoint_and_ordered(
                lens in proptest::collection::vec(1usize..=64, 1..20)
            ) {
                let mut arena = TensorArena::with_byte_capacity(64 * 20 * 4);
                for (i, &len) in lens.iter().enumerate() {
                    arena.allocate(TensorId(i as u32), len * 4).unwrap();
                }
                let mut prev_end = 0;
                for i in 0..lens.len() {
                    let (offset, len) = arena.region_location(TensorId(i as u32)).unwrap();
                    prop_assert_eq!(offset, prev_end);
                    prop_assert_eq!(len, lens[i]);
                    prev_end = offset + len;
                }
            }

            /// used_bytes equals the slot-rounded sum of all requests.
            #[test]
            fn used_bytes_matches_rounded_sum(
                byte_lens in proptest::collection::vec(0usize..=257, 1..20)
            ) {
                // Worst case: 19 requests of 257 bytes, each rounding
                // up to 260.
                let mut arena = TensorArena::with_byte_capacity(260 * 20);
                for (i, &len) in byte_lens.iter().enumerate() {
                    arena.allocate(TensorId(i as u32), len).unwrap();
                }
                let expected: usize = byte_lens.iter().map(|l| l.div_ceil(4) * 4).sum();
                prop_assert_eq!(arena.used_bytes(), expected);
            }

            /// Allocation never succeeds past the configured budget.
            #[test]
            fn budget_is_never_exceeded(
                capacity in 0usize..=512,
                byte_lens in proptest::collection::vec(0usize..=128, 1..20)
            ) {
                let mut arena = TensorArena::with_byte_capacity(capacity);
                for (i, &len) in byte_lens.iter().enumerate() {
                    let _ = arena.allocate(TensorId(i as u32), len);
                    prop_assert!(arena.used_bytes() <= arena.capacity_bytes());
                }
            }
        }
    }
}
