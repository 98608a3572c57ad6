//! Type descriptors — the structural model the estimator walks.

/// Leaf categories with a fixed or table-derived size bound.
///
/// A leaf is never decomposed into fields; its bound comes straight from
/// the [`BoundTable`](crate::estimate::BoundTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    /// 8-bit integer, single-digit range assumed.
    Int8,
    /// 32-bit integer, worst case `-2147483648`.
    Int32,
    /// 64-bit integer, worst case `-9223372036854775808`.
    Int64,
    /// Single-precision float.
    Float32,
    /// Double-precision float, up to scientific notation.
    Float64,
    /// `true` / `false`.
    Bool,
    /// UTF-8 string, bounded by the configured maximum length.
    Str,
    /// Calendar date, fixed `"YYYY-MM-DD"`.
    Date,
    /// Date-time without zone, fixed `"YYYY-MM-DDThh:mm:ss.sss"`.
    DateTime,
    /// Zoned date-time, fixed millisecond precision plus `Z`/offset.
    DateTimeZoned,
    /// Point-in-time instant, same wire shape as a zoned date-time.
    Timestamp,
    /// Legacy date/time value; spans the narrowest to widest ISO-8601 variant.
    LegacyTimestamp,
    /// Canonical UUID, fixed 36 characters plus quotes.
    Uuid,
    /// Binary blob, bounded by the configured maximum length.
    Binary,
    /// A builtin the bound table has no entry for. Estimated with a fixed
    /// fallback and a diagnostic.
    Opaque,
}

impl LeafKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int8 => "i8",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::DateTimeZoned => "datetime-zoned",
            Self::Timestamp => "timestamp",
            Self::LegacyTimestamp => "legacy-timestamp",
            Self::Uuid => "uuid",
            Self::Binary => "binary",
            Self::Opaque => "opaque",
        }
    }
}

/// A structural type, as the estimator sees it.
///
/// The variant is assigned once when the schema is built; the estimator
/// dispatches on it with a single `match` instead of repeated runtime
/// type tests. Cyclic graphs are expressed through [`TypeSchema::Ref`],
/// resolved against a [`SchemaRegistry`](crate::schema::SchemaRegistry).
#[derive(Debug, Clone)]
pub enum TypeSchema {
    /// A leaf with a table-derived bound.
    Leaf(LeafKind),
    /// A sequence of bounded cardinality. `elem` is the element type taken
    /// from the first generic argument or the array component type; `None`
    /// models a raw/untyped collection, which gets a fixed fallback bound.
    Collection { elem: Option<Box<TypeSchema>> },
    /// An enumeration, encoded as the constant's name string.
    Enum { constants: Vec<String> },
    /// A record of named fields. `extends` names ancestor composites whose
    /// fields are flattened in at registration time.
    Composite {
        fields: Vec<FieldSchema>,
        extends: Vec<String>,
    },
    /// A named reference to a registered type.
    Ref(String),
}

impl TypeSchema {
    /// Returns the kind string for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Leaf(kind) => kind.as_str(),
            Self::Collection { .. } => "collection",
            Self::Enum { .. } => "enum",
            Self::Composite { .. } => "composite",
            Self::Ref(_) => "ref",
        }
    }
}

impl std::fmt::Display for TypeSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A named field of a composite type.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: String,
    pub value: TypeSchema,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, value: TypeSchema) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
