mod cursor;
pub use cursor::Cursor;

mod statement;
pub use statement::Statement;

mod value;
pub(crate) use value::Value;

use miniorm_core::{driver, Error, Result};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// `sqlite::memory:` opens an in-memory database, `sqlite:<path>` opens
    /// (or creates) a database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL does not name a database; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a connection. Each in-memory connection is a fresh database.
    pub fn connect(&self) -> Result<Connection> {
        log::debug!(target: "miniorm::sqlite", "connecting; url={}", self.url());

        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

/// A single rusqlite connection.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

impl From<RusqliteConnection> for Connection {
    fn from(connection: RusqliteConnection) -> Self {
        Self { connection }
    }
}

impl driver::Connection for Connection {
    type Statement<'c>
        = Statement<'c>
    where
        Self: 'c;

    fn prepare(&self, sql: &str) -> Result<Statement<'_>> {
        log::trace!(target: "miniorm::sqlite", "prepare; sql={sql}");

        let stmt = self
            .connection
            .prepare(sql)
            .map_err(Error::driver_operation_failed)?;

        Ok(Statement::new(&self.connection, stmt, sql))
    }
}
