//! `json-bound` — schema-driven JSON size bounds.
//!
//! Computes a conservative `(min, max)` bound on the byte length of the
//! JSON representation of a value of a given type, without serializing any
//! data. Intended for capacity planning — buffer sizing, quota checks —
//! when the concrete data is not yet available but its schema is known.
//!
//! ```
//! use std::sync::Arc;
//! use json_bound::{EstimatorConfig, JsonSizeEstimator, SchemaBuilder, SchemaRegistry};
//!
//! let b = SchemaBuilder::new();
//! let registry = SchemaRegistry::new();
//! registry
//!     .register(
//!         "User",
//!         b.composite(vec![
//!             b.field("id", b.uuid()),
//!             b.field("name", b.str()),
//!             b.field("scores", b.list(b.i32())),
//!         ]),
//!     )
//!     .unwrap();
//!
//! let mut estimator = JsonSizeEstimator::new(Arc::new(registry), EstimatorConfig::new(10));
//! let bound = estimator.estimate("User").unwrap();
//! assert!(bound.min_size <= bound.max_size);
//! ```

pub mod constants;
pub mod estimate;
pub mod schema;

// Re-export the most commonly used types at crate root
pub use constants::JsonOverhead;
pub use estimate::{BoundTable, EstimatorConfig, JsonSizeEstimator, SizeEstimate};
pub use schema::{FieldSchema, LeafKind, SchemaBuilder, SchemaError, SchemaRegistry, TypeSchema};
