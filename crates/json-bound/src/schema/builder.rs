//! SchemaBuilder — factory for constructing TypeSchema values.

use super::schema::{FieldSchema, LeafKind, TypeSchema};

/// Factory for [`TypeSchema`] and [`FieldSchema`] values.
///
/// Purely ergonomic; every method is a thin constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Leaves

    pub fn i8(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Int8)
    }

    pub fn i32(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Int32)
    }

    pub fn i64(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Int64)
    }

    pub fn f32(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Float32)
    }

    pub fn f64(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Float64)
    }

    pub fn bool(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Bool)
    }

    pub fn str(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Str)
    }

    pub fn date(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Date)
    }

    pub fn date_time(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::DateTime)
    }

    pub fn date_time_zoned(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::DateTimeZoned)
    }

    pub fn timestamp(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Timestamp)
    }

    pub fn legacy_timestamp(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::LegacyTimestamp)
    }

    pub fn uuid(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Uuid)
    }

    pub fn binary(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Binary)
    }

    pub fn opaque(&self) -> TypeSchema {
        TypeSchema::Leaf(LeafKind::Opaque)
    }

    // ------------------------------------------------------------------
    // Composites, collections, enums

    /// A collection whose element type is known.
    pub fn list(&self, elem: TypeSchema) -> TypeSchema {
        TypeSchema::Collection {
            elem: Some(Box::new(elem)),
        }
    }

    /// A raw/untyped collection. Estimated with a fixed fallback bound.
    pub fn raw_list(&self) -> TypeSchema {
        TypeSchema::Collection { elem: None }
    }

    /// An enumeration over the given constant names.
    pub fn enum_<S: Into<String>>(&self, constants: Vec<S>) -> TypeSchema {
        TypeSchema::Enum {
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }

    /// A composite with no ancestors.
    pub fn composite(&self, fields: Vec<FieldSchema>) -> TypeSchema {
        TypeSchema::Composite {
            fields,
            extends: vec![],
        }
    }

    /// A composite extending the named ancestor types. Ancestor fields are
    /// flattened in, after the declared ones, at registration time.
    pub fn extending<S: Into<String>>(
        &self,
        fields: Vec<FieldSchema>,
        extends: Vec<S>,
    ) -> TypeSchema {
        TypeSchema::Composite {
            fields,
            extends: extends.into_iter().map(Into::into).collect(),
        }
    }

    /// A named reference to a registered type.
    pub fn ref_(&self, name: impl Into<String>) -> TypeSchema {
        TypeSchema::Ref(name.into())
    }

    pub fn field(&self, name: impl Into<String>, value: TypeSchema) -> FieldSchema {
        FieldSchema::new(name, value)
    }
}
