//! SchemaRegistry — a namespace of named type schemas.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use thiserror::Error;

use super::schema::{FieldSchema, TypeSchema};

/// Errors surfaced while registering or resolving named types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A reference or `extends` entry names a type that is not registered.
    #[error("unknown type: {name}")]
    UnknownType { name: String },
    /// The name is already registered. Entries are write-once.
    #[error("type already registered: {name}")]
    DuplicateType { name: String },
    /// An `extends` entry names a type that is not a composite.
    #[error("not a composite type: {name}")]
    NotComposite { name: String },
}

/// Named type schemas, write-once per name.
///
/// Composite `extends` lists are flattened at registration: the stored
/// schema carries the full field list in declared-then-ancestor order and
/// an empty `extends`. Estimation never walks a hierarchy.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    inner: RwLock<HashMap<String, TypeSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single named type. Ancestors named in `extends` must
    /// already be registered.
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: TypeSchema,
    ) -> Result<(), SchemaError> {
        let mut batch = HashMap::new();
        batch.insert(name.into(), schema);
        self.import_types(batch)
    }

    /// Register a batch of named types. `extends` entries may reference
    /// other members of the same batch, in any order.
    pub fn import_types(&self, types: HashMap<String, TypeSchema>) -> Result<(), SchemaError> {
        {
            let inner = self.inner.read().unwrap();
            for name in types.keys() {
                if inner.contains_key(name) {
                    return Err(SchemaError::DuplicateType { name: name.clone() });
                }
            }
        }

        let mut expanded: HashMap<String, TypeSchema> = HashMap::new();
        for (name, schema) in &types {
            let flat = match schema {
                TypeSchema::Composite { .. } => {
                    let mut seen = HashSet::new();
                    let fields = self.expand_fields(name, &types, &mut seen)?;
                    TypeSchema::Composite {
                        fields,
                        extends: vec![],
                    }
                }
                other => other.clone(),
            };
            expanded.insert(name.clone(), flat);
        }

        let mut inner = self.inner.write().unwrap();
        for (name, schema) in expanded {
            inner.insert(name, schema);
        }
        Ok(())
    }

    /// Look up a registered type by name.
    pub fn get(&self, name: &str) -> Option<TypeSchema> {
        self.inner.read().unwrap().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().unwrap().contains_key(name)
    }

    /// Export all registered types as a map of schemas.
    pub fn export_types(&self) -> HashMap<String, TypeSchema> {
        self.inner.read().unwrap().clone()
    }

    /// Flattened field list for `name`: its own fields, then each ancestor's
    /// in `extends` order, ancestors expanded recursively. Shadowed names
    /// are kept once per declaration site.
    fn expand_fields(
        &self,
        name: &str,
        batch: &HashMap<String, TypeSchema>,
        seen: &mut HashSet<String>,
    ) -> Result<Vec<FieldSchema>, SchemaError> {
        // An ancestor already expanded on this chain is skipped, so a
        // malformed extends cycle cannot loop.
        if !seen.insert(name.to_string()) {
            return Ok(vec![]);
        }
        let schema = match batch.get(name) {
            Some(schema) => schema.clone(),
            None => self.get(name).ok_or_else(|| SchemaError::UnknownType {
                name: name.to_string(),
            })?,
        };
        let TypeSchema::Composite { fields, extends } = schema else {
            return Err(SchemaError::NotComposite {
                name: name.to_string(),
            });
        };
        let mut result = fields;
        for parent in &extends {
            result.extend(self.expand_fields(parent, batch, seen)?);
        }
        Ok(result)
    }
}
