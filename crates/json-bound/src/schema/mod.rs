//! Schema descriptors: the explicit, statically built type model the
//! estimator walks, plus the registry that names and flattens them.

pub mod builder;
pub mod registry;
#[allow(clippy::module_inception)]
pub mod schema;

pub use builder::SchemaBuilder;
pub use registry::{SchemaError, SchemaRegistry};
pub use schema::{FieldSchema, LeafKind, TypeSchema};
