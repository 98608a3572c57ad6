//! Fixed (min, max) bounds for recognized leaf types.

use crate::constants::JsonOverhead;
use crate::schema::LeafKind;

use super::size_estimate::SizeEstimate;

/// Construction-time tunables for the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Upper bound on the number of elements assumed present in any
    /// collection or array when computing a maximum. Caller-supplied;
    /// the engine enforces no default.
    pub max_collection_len: usize,
    /// Maximum assumed string length, excluding quotes.
    pub max_string_len: usize,
    /// Maximum assumed binary blob length.
    pub max_binary_len: usize,
}

impl EstimatorConfig {
    pub const DEFAULT_MAX_STRING_LEN: usize = 255;
    pub const DEFAULT_MAX_BINARY_LEN: usize = 1000;

    pub fn new(max_collection_len: usize) -> Self {
        Self {
            max_collection_len,
            max_string_len: Self::DEFAULT_MAX_STRING_LEN,
            max_binary_len: Self::DEFAULT_MAX_BINARY_LEN,
        }
    }
}

/// Static (min, max) byte bounds per leaf category, seeded from the
/// configured string and binary maxima.
#[derive(Debug, Clone, Copy)]
pub struct BoundTable {
    max_string_len: usize,
    max_binary_len: usize,
}

impl BoundTable {
    pub fn new(config: &EstimatorConfig) -> Self {
        Self {
            max_string_len: config.max_string_len,
            max_binary_len: config.max_binary_len,
        }
    }

    /// Bound for a leaf category, or `None` for a builtin the table does
    /// not cover.
    pub fn get(&self, kind: LeafKind) -> Option<SizeEstimate> {
        let (min_size, max_size) = match kind {
            LeafKind::Int8 => (1, 1),
            LeafKind::Int32 => (1, 11),  // "-2147483648"
            LeafKind::Int64 => (1, 20),  // "-9223372036854775808"
            LeafKind::Float32 => (3, 15),
            LeafKind::Float64 => (3, 24), // "0.0" up to scientific notation
            LeafKind::Bool => (4, 5),     // "true" / "false"
            LeafKind::Str => (
                JsonOverhead::QUOTES,
                self.max_string_len + JsonOverhead::QUOTES,
            ),
            LeafKind::Date => (12, 12),          // "YYYY-MM-DD"
            LeafKind::DateTime => (25, 25),      // "YYYY-MM-DDThh:mm:ss.sss"
            LeafKind::DateTimeZoned => (26, 26), // "YYYY-MM-DDThh:mm:ss.sssZ"
            LeafKind::Timestamp => (26, 26),
            LeafKind::LegacyTimestamp => (10, 34), // narrowest to widest ISO-8601 variant
            LeafKind::Uuid => (36, 36),
            LeafKind::Binary => (0, self.max_binary_len),
            LeafKind::Opaque => return None,
        };
        Some(SizeEstimate::new(min_size, max_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BoundTable {
        BoundTable::new(&EstimatorConfig::new(10))
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(table().get(LeafKind::Int8), Some(SizeEstimate::new(1, 1)));
        assert_eq!(table().get(LeafKind::Int32), Some(SizeEstimate::new(1, 11)));
        assert_eq!(table().get(LeafKind::Int64), Some(SizeEstimate::new(1, 20)));
    }

    #[test]
    fn test_string_bound_tracks_config() {
        assert_eq!(table().get(LeafKind::Str), Some(SizeEstimate::new(2, 257)));

        let mut config = EstimatorConfig::new(10);
        config.max_string_len = 16;
        let table = BoundTable::new(&config);
        assert_eq!(table.get(LeafKind::Str), Some(SizeEstimate::new(2, 18)));
    }

    #[test]
    fn test_binary_bound_tracks_config() {
        assert_eq!(
            table().get(LeafKind::Binary),
            Some(SizeEstimate::new(0, 1000))
        );

        let mut config = EstimatorConfig::new(10);
        config.max_binary_len = 64;
        let table = BoundTable::new(&config);
        assert_eq!(table.get(LeafKind::Binary), Some(SizeEstimate::new(0, 64)));
    }

    #[test]
    fn test_temporal_bounds_are_fixed_width() {
        for kind in [
            LeafKind::Date,
            LeafKind::DateTime,
            LeafKind::DateTimeZoned,
            LeafKind::Timestamp,
            LeafKind::Uuid,
        ] {
            let bound = table().get(kind).unwrap();
            assert_eq!(bound.min_size, bound.max_size, "{}", kind.as_str());
        }
        assert_eq!(
            table().get(LeafKind::LegacyTimestamp),
            Some(SizeEstimate::new(10, 34))
        );
    }

    #[test]
    fn test_opaque_has_no_entry() {
        assert_eq!(table().get(LeafKind::Opaque), None);
    }

    #[test]
    fn test_min_never_exceeds_max() {
        for kind in [
            LeafKind::Int8,
            LeafKind::Int32,
            LeafKind::Int64,
            LeafKind::Float32,
            LeafKind::Float64,
            LeafKind::Bool,
            LeafKind::Str,
            LeafKind::Date,
            LeafKind::DateTime,
            LeafKind::DateTimeZoned,
            LeafKind::Timestamp,
            LeafKind::LegacyTimestamp,
            LeafKind::Uuid,
            LeafKind::Binary,
        ] {
            let bound = table().get(kind).unwrap();
            assert!(bound.min_size <= bound.max_size, "{}", kind.as_str());
        }
    }
}
