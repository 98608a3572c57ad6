//! Fixed byte overheads of JSON punctuation.

/// Byte cost of the JSON syntax surrounding values, field names, and
/// sequence elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOverhead;

impl JsonOverhead {
    /// Enclosing `{}` of an object.
    pub const OBJECT: usize = 2;
    /// Enclosing `[]` of an array.
    pub const ARRAY: usize = 2;
    /// Quotes and colon around a field name: `"name":`.
    pub const FIELD_NAME: usize = 3;
    /// Comma between elements or fields.
    pub const SEPARATOR: usize = 1;
    /// Quotes around a string or enum constant.
    pub const QUOTES: usize = 2;
}
