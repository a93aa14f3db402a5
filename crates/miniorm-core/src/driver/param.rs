/// SQL type a NULL parameter is declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Double,
    Varchar,
    Numeric,
}

/// A statement parameter in its SQL-side form.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Typed SQL NULL. Drivers without typed nulls may ignore the type.
    Null(SqlType),
    Integer(i64),
    Double(f64),
    Text(String),
    Bool(bool),
}
