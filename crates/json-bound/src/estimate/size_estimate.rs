//! SizeEstimate — a (min, max) bound on serialized byte length.

/// Bound on the serialized byte length of one JSON value.
///
/// Invariant: `min_size <= max_size` for every completed estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimate {
    pub min_size: usize,
    pub max_size: usize,
}

impl SizeEstimate {
    /// Bound returned for a type re-entered on the active call chain:
    /// the recurrence is priced as an empty object. Caps otherwise-infinite
    /// recursion; undercounts deeply cyclic structures.
    pub const CYCLE: SizeEstimate = SizeEstimate::new(2, 2);

    /// Fallback for a builtin leaf absent from the bound table.
    pub const OPAQUE_LEAF: SizeEstimate = SizeEstimate::new(2, 100);

    /// Fallback for a raw/untyped collection whose element type is unknown.
    pub const RAW_COLLECTION: SizeEstimate = SizeEstimate::new(2, 1000);

    pub const fn new(min_size: usize, max_size: usize) -> Self {
        Self { min_size, max_size }
    }

    /// Whether an actual serialized length falls within this bound.
    pub fn contains(&self, len: usize) -> bool {
        self.min_size <= len && len <= self.max_size
    }
}

impl std::fmt::Display for SizeEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "min {} bytes, max {} bytes", self.min_size, self.max_size)
    }
}
