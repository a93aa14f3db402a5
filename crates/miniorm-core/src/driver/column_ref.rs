use std::fmt;

/// Identifies a column in the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef<'a> {
    /// Column label, matched case-insensitively.
    Name(&'a str),

    /// 1-based column position.
    Position(usize),
}

impl fmt::Display for ColumnRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name(name) => write!(f, "`{name}`"),
            ColumnRef::Position(position) => write!(f, "#{position}"),
        }
    }
}
