use super::Value;
use crate::schema::{ColumnDescriptor, ValueKind};

/// A field value paired with the coercion rule used to bind it.
///
/// Bound values live for a single statement-binding pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
    pub kind: ValueKind,
    pub value: Value,
}

impl BoundValue {
    pub fn new(kind: ValueKind, value: impl Into<Value>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Pairs a value extracted from an entity with its column's kind.
    pub fn for_column(column: &ColumnDescriptor, value: Value) -> Self {
        Self {
            kind: column.kind,
            value,
        }
    }
}
