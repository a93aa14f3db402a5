use super::{ColumnDescriptor, ValueKind, IDENTITY_COLUMN};
use crate::{Error, Result};

use std::collections::HashSet;

/// Mapping metadata for one entity type: its table, its fields in declared
/// order, and which of them is the identity.
///
/// Descriptors are validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    table_name: String,

    /// Every mapped field in declared order, the identity included.
    fields: Vec<ColumnDescriptor>,

    /// Position of the identity field within `fields`.
    identity: usize,
}

impl EntityDescriptor {
    /// Builds a descriptor, rejecting metadata the engine cannot map.
    ///
    /// The identity field must map to the `id` column with an `Int32` or
    /// `Int32Nullable` kind, since generated keys are written back as 32-bit
    /// integers and UPDATE/DELETE predicates always name `id`.
    pub fn new(
        table_name: impl Into<String>,
        identity_field: &str,
        fields: Vec<ColumnDescriptor>,
    ) -> Result<Self> {
        let table_name = table_name.into();

        if table_name.trim().is_empty() {
            return Err(Error::invalid_metadata("entity declares no table name"));
        }

        let mut field_names = HashSet::new();
        let mut column_names = HashSet::new();

        for field in &fields {
            if field.field_name.is_empty() {
                return Err(Error::invalid_metadata(format!(
                    "table `{table_name}` maps a field with no name"
                )));
            }

            if field.column_name.trim().is_empty() {
                return Err(Error::invalid_metadata(format!(
                    "field `{}` of table `{table_name}` has no column name",
                    field.field_name
                )));
            }

            if !field_names.insert(field.field_name.as_str()) {
                return Err(Error::invalid_metadata(format!(
                    "field `{}` is mapped more than once in table `{table_name}`",
                    field.field_name
                )));
            }

            if !column_names.insert(field.column_name.as_str()) {
                return Err(Error::invalid_metadata(format!(
                    "column `{}` is mapped more than once in table `{table_name}`",
                    field.column_name
                )));
            }
        }

        let Some(identity) = fields.iter().position(|f| f.field_name == identity_field) else {
            return Err(Error::invalid_metadata(format!(
                "identity field `{identity_field}` is not mapped in table `{table_name}`"
            )));
        };

        let id = &fields[identity];

        if id.column_name != IDENTITY_COLUMN {
            return Err(Error::invalid_metadata(format!(
                "identity field `{}` maps to column `{}`; identity columns must be named `{IDENTITY_COLUMN}`",
                id.field_name, id.column_name
            )));
        }

        if !matches!(id.kind, ValueKind::Int32 | ValueKind::Int32Nullable) {
            return Err(Error::invalid_metadata(format!(
                "identity field `{}` has kind {}; expected Int32 or Int32Nullable",
                id.field_name, id.kind
            )));
        }

        Ok(Self {
            table_name,
            fields,
            identity,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The identity field.
    pub fn identity(&self) -> &ColumnDescriptor {
        &self.fields[self.identity]
    }

    /// All mapped fields in declared order, the identity included. This is
    /// the order in which rows are read back.
    pub fn fields(&self) -> &[ColumnDescriptor] {
        &self.fields
    }

    /// Non-identity fields in declared order. These are the columns written
    /// by INSERT and UPDATE.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDescriptor> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != self.identity)
            .map(|(_, field)| field)
    }
}
