//! Wire field descriptor as reported by the client library.
//!
//! This struct preserves the raw `MYSQL_FIELD` data the core reads.
//! For user-facing API, use `MetaColumn` which provides a portable view.

use crate::protocol::constants::{NOT_NULL_FLAG, UNSIGNED_FLAG};

use super::field_type::FieldType;

/// Wire field descriptor for one result column.
///
/// Use `MetaColumn` for user-facing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name.
    pub name: String,
    /// Wire type code (`enum_field_types`).
    pub type_code: u32,
    /// Column flag bits.
    pub flags: u32,
    /// Declared maximum length in bytes.
    pub length: u64,
}

impl FieldDescriptor {
    /// Create a field descriptor with no flags set.
    pub fn new(name: impl Into<String>, type_code: u32, length: u64) -> Self {
        Self {
            name: name.into(),
            type_code,
            flags: 0,
            length,
        }
    }

    /// Set the column flag bits.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Recognized wire type, or `None` for an unknown code.
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_code(self.type_code)
    }

    /// Whether the `UNSIGNED_FLAG` bit is set.
    pub fn is_unsigned(&self) -> bool {
        self.flags & UNSIGNED_FLAG == UNSIGNED_FLAG
    }

    /// Whether the `NOT_NULL_FLAG` bit is set.
    pub fn is_not_null(&self) -> bool {
        self.flags & NOT_NULL_FLAG != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::*;

    #[test]
    fn test_flags() {
        let field = FieldDescriptor::new("id", MYSQL_TYPE_LONG, 11)
            .with_flags(NOT_NULL_FLAG | UNSIGNED_FLAG | PRI_KEY_FLAG);
        assert!(field.is_unsigned());
        assert!(field.is_not_null());

        let field = FieldDescriptor::new("note", MYSQL_TYPE_VAR_STRING, 255);
        assert!(!field.is_unsigned());
        assert!(!field.is_not_null());
    }

    #[test]
    fn test_field_type() {
        let field = FieldDescriptor::new("n", MYSQL_TYPE_NEWDECIMAL, 12);
        assert_eq!(field.field_type(), Some(FieldType::NewDecimal));
        assert_eq!(FieldDescriptor::new("x", 100, 0).field_type(), None);
    }
}
