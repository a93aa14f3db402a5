#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{Assignment, Bind, Column};

mod delim;
use delim::Comma;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
///
/// Identifiers are written verbatim; callers are responsible for table and
/// column names being safe to splice into SQL. Values never appear in the
/// output: each one becomes a `?` placeholder and the column that supplies it
/// is pushed onto the [`Params`] sink, in placeholder order.
#[derive(Debug, Default)]
pub struct Serializer;

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(&self, stmt: &Statement<'_>, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
