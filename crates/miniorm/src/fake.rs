//! In-memory driver that records what the engine does with it.

use crate::{
    driver::{self, ColumnRef, Param, Response},
    Error, Result,
};

use std::{cell::RefCell, collections::VecDeque};

#[derive(Debug, Default)]
pub(crate) struct FakeConnection {
    columns: Vec<String>,
    rows: Vec<Vec<Param>>,
    generated_id: Option<i64>,

    /// Statements run through `execute_update` or `execute_query`.
    executed: RefCell<Vec<String>>,

    /// Parameters bound since the last `prepare`.
    bound: RefCell<Vec<(usize, Param)>>,
}

impl FakeConnection {
    pub(crate) fn with_rows(columns: Vec<&str>, rows: Vec<Vec<Param>>) -> Self {
        Self {
            columns: columns.into_iter().map(String::from).collect(),
            rows,
            ..Self::default()
        }
    }

    pub(crate) fn with_generated_id(generated_id: i64) -> Self {
        Self {
            generated_id: Some(generated_id),
            ..Self::default()
        }
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub(crate) fn last_bound(&self) -> Vec<(usize, Param)> {
        self.bound.borrow().clone()
    }
}

impl driver::Connection for FakeConnection {
    type Statement<'c>
        = FakeStatement<'c>
    where
        Self: 'c;

    fn prepare(&self, sql: &str) -> Result<FakeStatement<'_>> {
        if sql.contains("syntax error") {
            return Err(Error::driver_operation_failed(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "near \"syntax\": syntax error",
            )));
        }

        self.bound.borrow_mut().clear();

        Ok(FakeStatement {
            connection: self,
            sql: sql.to_string(),
        })
    }
}

pub(crate) struct FakeStatement<'c> {
    connection: &'c FakeConnection,
    sql: String,
}

impl driver::Statement for FakeStatement<'_> {
    type Cursor<'s>
        = FakeCursor
    where
        Self: 's;

    fn bind_at(&mut self, position: usize, param: Param) -> Result<()> {
        self.connection.bound.borrow_mut().push((position, param));
        Ok(())
    }

    fn execute_update(&mut self) -> Result<Response> {
        self.connection.executed.borrow_mut().push(self.sql.clone());

        match self.connection.generated_id {
            Some(id) if self.sql.starts_with("INSERT") => Ok(Response::inserted(1, id)),
            _ => Ok(Response::count(1)),
        }
    }

    fn execute_query(&mut self) -> Result<FakeCursor> {
        self.connection.executed.borrow_mut().push(self.sql.clone());

        Ok(FakeCursor {
            columns: self.connection.columns.clone(),
            rows: self.connection.rows.clone().into(),
            current: None,
            was_null: false,
        })
    }
}

pub(crate) struct FakeCursor {
    columns: Vec<String>,
    rows: VecDeque<Vec<Param>>,
    current: Option<Vec<Param>>,
    was_null: bool,
}

impl FakeCursor {
    pub(crate) fn new(columns: Vec<&str>, rows: Vec<Vec<Param>>) -> Self {
        Self {
            columns: columns.into_iter().map(String::from).collect(),
            rows: rows.into(),
            current: None,
            was_null: false,
        }
    }

    fn value(&mut self, column: ColumnRef<'_>) -> Result<Param> {
        let row = self
            .current
            .as_ref()
            .ok_or_else(|| Error::resource("cursor is not positioned on a row"))?;

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

        let value = row[index].clone();
        self.was_null = matches!(value, Param::Null(_));
        Ok(value)
    }
}

impl driver::Cursor for FakeCursor {
    fn next(&mut self) -> Result<bool> {
        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn get_integer(&mut self, column: ColumnRef<'_>) -> Result<i64> {
        Ok(match self.value(column)? {
            Param::Integer(v) => v,
            Param::Double(v) => v as i64,
            Param::Bool(v) => v.into(),
            Param::Text(v) => v
                .parse()
                .map_err(|_| Error::coercion(format!("`{v}` is not an integer")))?,
            Param::Null(_) => 0,
        })
    }

    fn get_double(&mut self, column: ColumnRef<'_>) -> Result<f64> {
        Ok(match self.value(column)? {
            Param::Integer(v) => v as f64,
            Param::Double(v) => v,
            Param::Bool(v) => f64::from(u8::from(v)),
            Param::Text(v) => v
                .parse()
                .map_err(|_| Error::coercion(format!("`{v}` is not a number")))?,
            Param::Null(_) => 0.0,
        })
    }

    fn get_text(&mut self, column: ColumnRef<'_>) -> Result<String> {
        Ok(match self.value(column)? {
            Param::Integer(v) => v.to_string(),
            Param::Double(v) => v.to_string(),
            Param::Bool(v) => u8::from(v).to_string(),
            Param::Text(v) => v,
            Param::Null(_) => String::new(),
        })
    }

    fn was_null(&self) -> bool {
        self.was_null
    }
}
