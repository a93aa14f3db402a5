mod column_ref;
pub use column_ref::ColumnRef;

mod param;
pub use param::{Param, SqlType};

mod response;
pub use response::Response;

use crate::Result;

/// A single database connection.
///
/// Connections are used from one thread at a time. Every call to
/// [`Connection::prepare`] yields a fresh statement; nothing is cached.
pub trait Connection {
    type Statement<'c>: Statement
    where
        Self: 'c;

    /// Prepares `sql` for execution.
    fn prepare(&self, sql: &str) -> Result<Self::Statement<'_>>;
}

/// A prepared statement. Dropping it releases the underlying handle.
pub trait Statement {
    type Cursor<'s>: Cursor
    where
        Self: 's;

    /// Binds `param` to the 1-based parameter `position`.
    fn bind_at(&mut self, position: usize, param: Param) -> Result<()>;

    /// Executes a statement that produces no rows.
    fn execute_update(&mut self) -> Result<Response>;

    /// Executes a query and opens a cursor over its rows.
    fn execute_query(&mut self) -> Result<Self::Cursor<'_>>;
}

/// Forward-only cursor over a result set.
///
/// Getters follow the JDBC convention: a SQL NULL reads as the type's zero
/// value and sets the flag reported by [`Cursor::was_null`] until the next
/// getter call.
pub trait Cursor {
    /// Advances to the next row, returning `false` once rows are exhausted.
    fn next(&mut self) -> Result<bool>;

    fn get_integer(&mut self, column: ColumnRef<'_>) -> Result<i64>;

    fn get_double(&mut self, column: ColumnRef<'_>) -> Result<f64>;

    fn get_text(&mut self, column: ColumnRef<'_>) -> Result<String>;

    /// Whether the last value read was SQL NULL.
    fn was_null(&self) -> bool;
}
