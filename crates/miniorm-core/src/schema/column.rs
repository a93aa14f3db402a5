use super::ValueKind;

/// Maps one field of an entity to one column of its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// The name of the field on the entity.
    pub field_name: String,

    /// The name of the column in the database.
    pub column_name: String,

    /// How values of this field are coerced.
    pub kind: ValueKind,
}

impl ColumnDescriptor {
    pub fn new(
        field_name: impl Into<String>,
        column_name: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            column_name: column_name.into(),
            kind,
        }
    }
}
