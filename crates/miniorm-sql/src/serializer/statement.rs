use super::{Assignment, Bind, Column, Comma, Formatter, Params, ToSql};

use crate::stmt::{Delete, Insert, Statement, Update};
use miniorm_core::schema::IDENTITY_COLUMN;

impl ToSql for &Statement<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = Comma(self.columns.iter().copied().map(Column));
        let values = Comma(self.columns.iter().copied().map(Bind));

        fmt!(f, "INSERT INTO " self.table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Update<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let assignments = Comma(self.columns.iter().copied().map(Assignment));

        fmt!(f, "UPDATE " self.table " SET " assignments " WHERE " IDENTITY_COLUMN " = " Bind(self.identity));
    }
}

impl ToSql for &Delete<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "DELETE FROM " self.table " WHERE " IDENTITY_COLUMN " = " Bind(self.identity));
    }
}
