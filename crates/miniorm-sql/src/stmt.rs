use miniorm_core::schema::{ColumnDescriptor, EntityDescriptor};

/// A write statement synthesized from entity metadata.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    Insert(Insert<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
}

/// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
#[derive(Debug, Clone)]
pub struct Insert<'a> {
    pub table: &'a str,

    /// Non-identity columns in declared order.
    pub columns: Vec<&'a ColumnDescriptor>,
}

/// `UPDATE <table> SET <column> = ?, ... WHERE id = ?`
#[derive(Debug, Clone)]
pub struct Update<'a> {
    pub table: &'a str,

    /// Non-identity columns in declared order.
    pub columns: Vec<&'a ColumnDescriptor>,

    /// Supplies the value bound to the `id` predicate.
    pub identity: &'a ColumnDescriptor,
}

/// `DELETE FROM <table> WHERE id = ?`
#[derive(Debug, Clone)]
pub struct Delete<'a> {
    pub table: &'a str,

    /// Supplies the value bound to the `id` predicate.
    pub identity: &'a ColumnDescriptor,
}

impl<'a> Statement<'a> {
    pub fn insert(entity: &'a EntityDescriptor) -> Self {
        Insert {
            table: entity.table_name(),
            columns: entity.columns().collect(),
        }
        .into()
    }

    pub fn update(entity: &'a EntityDescriptor) -> Self {
        Update {
            table: entity.table_name(),
            columns: entity.columns().collect(),
            identity: entity.identity(),
        }
        .into()
    }

    pub fn delete(entity: &'a EntityDescriptor) -> Self {
        Delete {
            table: entity.table_name(),
            identity: entity.identity(),
        }
        .into()
    }
}

impl<'a> From<Insert<'a>> for Statement<'a> {
    fn from(value: Insert<'a>) -> Self {
        Self::Insert(value)
    }
}

impl<'a> From<Update<'a>> for Statement<'a> {
    fn from(value: Update<'a>) -> Self {
        Self::Update(value)
    }
}

impl<'a> From<Delete<'a>> for Statement<'a> {
    fn from(value: Delete<'a>) -> Self {
        Self::Delete(value)
    }
}
