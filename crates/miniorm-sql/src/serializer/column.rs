use super::{Formatter, Params, ToSql};

use miniorm_core::schema::ColumnDescriptor;

/// Writes a column's name.
pub(super) struct Column<'a>(pub(super) &'a ColumnDescriptor);

/// Writes `<column> = ?` and registers the column as a parameter.
pub(super) struct Assignment<'a>(pub(super) &'a ColumnDescriptor);

/// Writes `?` and registers the column as a parameter.
pub(super) struct Bind<'a>(pub(super) &'a ColumnDescriptor);

impl ToSql for Column<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(&self.0.column_name);
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Column(self.0) " = " Bind(self.0));
    }
}

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self.0);
        placeholder.to_sql(f);
    }
}
