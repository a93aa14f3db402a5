use miniorm_core::{driver::Param, Error, Result};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Parameter wrapper that rusqlite can bind.
#[derive(Debug)]
pub(crate) struct Value(Param);

impl From<Param> for Value {
    fn from(value: Param) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            // SQLite NULLs are untyped
            Param::Null(_) => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Param::Integer(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Param::Double(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Param::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Param::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Param::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
        }
    }
}

/// Reads a stored value as an integer. NULL reads as `None`.
pub(crate) fn to_integer(value: &SqlValue) -> Result<Option<i64>> {
    match value {
        SqlValue::Null => Ok(None),
        SqlValue::Integer(v) => Ok(Some(*v)),
        SqlValue::Real(v) => Ok(Some(*v as i64)),
        SqlValue::Text(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::coercion(format!("`{v}` is not an integer"))),
        SqlValue::Blob(_) => Err(Error::coercion("cannot read a blob as an integer")),
    }
}

/// Reads a stored value as a double. NULL reads as `None`.
pub(crate) fn to_double(value: &SqlValue) -> Result<Option<f64>> {
    match value {
        SqlValue::Null => Ok(None),
        SqlValue::Integer(v) => Ok(Some(*v as f64)),
        SqlValue::Real(v) => Ok(Some(*v)),
        SqlValue::Text(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::coercion(format!("`{v}` is not a number"))),
        SqlValue::Blob(_) => Err(Error::coercion("cannot read a blob as a number")),
    }
}

/// Reads a stored value as text. NULL reads as `None`.
pub(crate) fn to_text(value: &SqlValue) -> Result<Option<String>> {
    match value {
        SqlValue::Null => Ok(None),
        SqlValue::Integer(v) => Ok(Some(v.to_string())),
        SqlValue::Real(v) => Ok(Some(v.to_string())),
        SqlValue::Text(v) => Ok(Some(v.clone())),
        SqlValue::Blob(v) => String::from_utf8(v.clone())
            .map(Some)
            .map_err(|_| Error::coercion("blob is not valid UTF-8 text")),
    }
}
