//! The recursive, cycle-safe bound-computation engine.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::warn;

use crate::constants::JsonOverhead;
use crate::schema::{FieldSchema, SchemaError, SchemaRegistry, TypeSchema};

use super::bound_table::{BoundTable, EstimatorConfig};
use super::size_estimate::SizeEstimate;

/// Computes (min, max) byte bounds for the JSON encoding of values of
/// registered types, without serializing anything.
///
/// Results are memoized per type name for the lifetime of the instance;
/// entries are write-once and never invalidated, so registered types must
/// not change while an estimator holds them. Not safe for concurrent use
/// from multiple threads: use one instance per thread or an external lock.
pub struct JsonSizeEstimator {
    registry: Arc<SchemaRegistry>,
    config: EstimatorConfig,
    table: BoundTable,
    cache: HashMap<String, SizeEstimate>,
}

impl JsonSizeEstimator {
    pub fn new(registry: Arc<SchemaRegistry>, config: EstimatorConfig) -> Self {
        let table = BoundTable::new(&config);
        Self {
            registry,
            config,
            table,
            cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the bound for a registered type.
    ///
    /// Deterministic and memoized: a second call for the same name returns
    /// the cached result without re-traversing fields. Fails only when a
    /// name (the root or a `Ref` reached from it) is not registered.
    pub fn estimate(&mut self, name: &str) -> Result<SizeEstimate, SchemaError> {
        let mut guard = HashSet::new();
        self.estimate_named(name, &mut guard)
    }

    /// Estimate the bound for an anonymous schema not held in the registry.
    /// `Ref`s inside it still resolve through the registry and are cached.
    pub fn estimate_schema(&mut self, schema: &TypeSchema) -> Result<SizeEstimate, SchemaError> {
        let mut guard = HashSet::new();
        self.value_bound(schema, &mut guard)
    }

    /// The memoized estimate for `name`, if one has been computed.
    pub fn cached(&self, name: &str) -> Option<SizeEstimate> {
        self.cache.get(name).copied()
    }

    /// Estimate a registered type, going through the cache and the
    /// recursion guard. The guard tracks the names on the active call
    /// chain; a re-entered name is priced as an empty object instead of
    /// recursing.
    fn estimate_named(
        &mut self,
        name: &str,
        guard: &mut HashSet<String>,
    ) -> Result<SizeEstimate, SchemaError> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(*cached);
        }
        if guard.contains(name) {
            return Ok(SizeEstimate::CYCLE);
        }
        let schema = self
            .registry
            .get(name)
            .ok_or_else(|| SchemaError::UnknownType {
                name: name.to_string(),
            })?;

        guard.insert(name.to_string());
        let result = match &schema {
            TypeSchema::Composite { fields, .. } => self.composite_bound(fields, guard),
            other => self.value_bound(other, guard),
        };
        // Removed on exit regardless of success.
        guard.remove(name);

        let estimate = result?;
        self.cache.insert(name.to_string(), estimate);
        Ok(estimate)
    }

    /// Sum field bounds with object punctuation overhead.
    ///
    /// Every field costs one separator plus `len(name) + 3` for the quoted
    /// name and colon; there is no trailing-separator correction, unlike
    /// collections, which subtract one. The asymmetry is contractual.
    fn composite_bound(
        &mut self,
        fields: &[FieldSchema],
        guard: &mut HashSet<String>,
    ) -> Result<SizeEstimate, SchemaError> {
        let mut min_size = JsonOverhead::OBJECT;
        let mut max_size = JsonOverhead::OBJECT;
        for field in fields {
            let name_overhead =
                JsonOverhead::SEPARATOR + field.name.len() + JsonOverhead::FIELD_NAME;
            min_size += name_overhead;
            max_size += name_overhead;

            let value = self.value_bound(&field.value, guard)?;
            min_size += value.min_size;
            max_size += value.max_size;
        }
        Ok(SizeEstimate::new(min_size, max_size))
    }

    /// Dispatch on the schema variant assigned at build time.
    fn value_bound(
        &mut self,
        schema: &TypeSchema,
        guard: &mut HashSet<String>,
    ) -> Result<SizeEstimate, SchemaError> {
        match schema {
            TypeSchema::Collection { elem } => self.collection_bound(elem.as_deref(), guard),
            TypeSchema::Leaf(kind) => Ok(self.table.get(*kind).unwrap_or_else(|| {
                warn!(kind = kind.as_str(), "no bound table entry, using fallback");
                SizeEstimate::OPAQUE_LEAF
            })),
            TypeSchema::Enum { constants } => Ok(enum_bound(constants)),
            TypeSchema::Ref(name) => self.estimate_named(name, guard),
            // Anonymous composites cannot be re-referenced, hence cannot
            // cycle; they bypass the cache and guard.
            TypeSchema::Composite { fields, .. } => self.composite_bound(fields, guard),
        }
    }

    /// Bound for a sequence of at most `max_collection_len` elements.
    ///
    /// The minimum always assumes an empty sequence. The maximum prices
    /// `max_collection_len` elements each followed by a separator, minus
    /// the trailing separator that does not exist after the last element;
    /// the subtraction saturates so a zero cardinality yields `[]`.
    fn collection_bound(
        &mut self,
        elem: Option<&TypeSchema>,
        guard: &mut HashSet<String>,
    ) -> Result<SizeEstimate, SchemaError> {
        let Some(elem) = elem else {
            return Ok(SizeEstimate::RAW_COLLECTION);
        };
        let element = self.value_bound(elem, guard)?;
        let per_element = element.max_size + JsonOverhead::SEPARATOR;
        let max_size = JsonOverhead::ARRAY
            + (self.config.max_collection_len * per_element).saturating_sub(JsonOverhead::SEPARATOR);
        Ok(SizeEstimate::new(JsonOverhead::ARRAY, max_size))
    }
}

/// Bound for an enumeration: quotes around the shortest and longest
/// constant name. An empty constant set degenerates to bare quotes.
fn enum_bound(constants: &[String]) -> SizeEstimate {
    let shortest = constants.iter().map(String::len).min().unwrap_or(0);
    let longest = constants.iter().map(String::len).max().unwrap_or(0);
    SizeEstimate::new(
        shortest + JsonOverhead::QUOTES,
        longest + JsonOverhead::QUOTES,
    )
}
