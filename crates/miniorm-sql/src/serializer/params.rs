use super::{Formatter, ToSql};

use miniorm_core::schema::ColumnDescriptor;

/// Receives the column behind each placeholder, in placeholder order.
pub trait Params {
    fn push(&mut self, column: &ColumnDescriptor) -> Placeholder;
}

/// 1-based position of a placeholder in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<ColumnDescriptor> {
    fn push(&mut self, column: &ColumnDescriptor) -> Placeholder {
        self.push(column.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
