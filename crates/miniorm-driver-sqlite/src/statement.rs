use crate::{Cursor, Value};

use miniorm_core::{
    driver::{self, Param, Response},
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;

/// A prepared rusqlite statement. Finalized when dropped.
#[derive(Debug)]
pub struct Statement<'c> {
    connection: &'c RusqliteConnection,
    stmt: rusqlite::Statement<'c>,

    /// INSERT and REPLACE statements report the rowid they generated.
    is_insert: bool,
}

impl<'c> Statement<'c> {
    pub(crate) fn new(
        connection: &'c RusqliteConnection,
        stmt: rusqlite::Statement<'c>,
        sql: &str,
    ) -> Self {
        Self {
            connection,
            stmt,
            is_insert: is_insert(sql),
        }
    }
}

/// Whether `sql` is a statement whose generated rowid is reported.
///
/// Only the leading keyword is inspected: `INSERT`, `INSERT OR ...` and
/// `REPLACE` qualify. An insert behind a `WITH` clause reports no generated
/// id.
fn is_insert(sql: &str) -> bool {
    let keyword = sql
        .trim_start()
        .split(|c: char| !c.is_ascii_alphabetic())
        .next()
        .unwrap_or_default();

    keyword.eq_ignore_ascii_case("insert") || keyword.eq_ignore_ascii_case("replace")
}

impl driver::Statement for Statement<'_> {
    type Cursor<'s>
        = Cursor<'s>
    where
        Self: 's;

    fn bind_at(&mut self, position: usize, param: Param) -> Result<()> {
        let count = self.stmt.parameter_count();

        if position == 0 || position > count {
            return Err(Error::resource(format!(
                "parameter position {position} is out of range; statement has {count} parameters"
            )));
        }

        self.stmt
            .raw_bind_parameter(position, Value::from(param))
            .map_err(Error::driver_operation_failed)
    }

    fn execute_update(&mut self) -> Result<Response> {
        let count = self
            .stmt
            .raw_execute()
            .map_err(Error::driver_operation_failed)? as u64;

        if self.is_insert && count > 0 {
            Ok(Response::inserted(count, self.connection.last_insert_rowid()))
        } else {
            Ok(Response::count(count))
        }
    }

    fn execute_query(&mut self) -> Result<Cursor<'_>> {
        let columns = self
            .stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        Ok(Cursor::new(self.stmt.raw_query(), columns))
    }
}
