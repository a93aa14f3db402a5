use crate::value;

use miniorm_core::{
    driver::{self, ColumnRef},
    Error, Result,
};
use rusqlite::types::Value as SqlValue;

/// Cursor over the rows of a rusqlite query.
///
/// Each row is copied out of SQLite when the cursor advances, so getters can
/// be called in any order and any number of times.
pub struct Cursor<'s> {
    rows: rusqlite::Rows<'s>,

    /// Column labels, in result order.
    columns: Vec<String>,

    /// Values of the current row. `None` before the first row and after the
    /// last.
    current: Option<Vec<SqlValue>>,

    was_null: bool,
}

impl<'s> Cursor<'s> {
    pub(crate) fn new(rows: rusqlite::Rows<'s>, columns: Vec<String>) -> Self {
        Self {
            rows,
            columns,
            current: None,
            was_null: false,
        }
    }

    fn value(&self, column: ColumnRef<'_>) -> Result<&SqlValue> {
        let Some(row) = &self.current else {
            return Err(Error::resource("cursor is not positioned on a row"));
        };

        let index = match column {
            ColumnRef::Name(name) => self
                .columns
                .iter()
                .position(|label| label.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    Error::invalid_metadata(format!("result set has no column named `{name}`"))
                })?,
            ColumnRef::Position(position) if (1..=row.len()).contains(&position) => position - 1,
            ColumnRef::Position(position) => {
                return Err(Error::invalid_metadata(format!(
                    "column position {position} is out of range; result set has {} columns",
                    row.len()
                )))
            }
        };

        Ok(&row[index])
    }
}

impl driver::Cursor for Cursor<'_> {
    fn next(&mut self) -> Result<bool> {
        let width = self.columns.len();

        match self.rows.next().map_err(Error::driver_operation_failed)? {
            Some(row) => {
                let values = (0..width)
                    .map(|index| row.get::<_, SqlValue>(index))
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(Error::driver_operation_failed)?;

                self.current = Some(values);
                Ok(true)
            }
            None => {
                self.current = None;
                Ok(false)
            }
        }
    }

    fn get_integer(&mut self, column: ColumnRef<'_>) -> Result<i64> {
        let value = value::to_integer(self.value(column)?)?;
        self.was_null = value.is_none();
        Ok(value.unwrap_or_default())
    }

    fn get_double(&mut self, column: ColumnRef<'_>) -> Result<f64> {
        let value = value::to_double(self.value(column)?)?;
        self.was_null = value.is_none();
        Ok(value.unwrap_or_default())
    }

    fn get_text(&mut self, column: ColumnRef<'_>) -> Result<String> {
        let value = value::to_text(self.value(column)?)?;
        self.was_null = value.is_none();
        Ok(value.unwrap_or_default())
    }

    fn was_null(&self) -> bool {
        self.was_null
    }
}
