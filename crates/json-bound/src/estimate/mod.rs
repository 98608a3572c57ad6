//! The bound-computation engine: leaf bound table, configuration, and the
//! recursive estimator.

pub mod bound_table;
pub mod estimator;
pub mod size_estimate;

pub use bound_table::{BoundTable, EstimatorConfig};
pub use estimator::JsonSizeEstimator;
pub use size_estimate::SizeEstimate;
