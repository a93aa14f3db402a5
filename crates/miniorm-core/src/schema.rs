mod column;
pub use column::ColumnDescriptor;

mod entity;
pub use entity::EntityDescriptor;

mod value_kind;
pub use value_kind::ValueKind;

/// Name of the identity column every entity maps its identity field to.
///
/// UPDATE and DELETE statements use this name in their `WHERE` predicate.
pub const IDENTITY_COLUMN: &str = "id";
