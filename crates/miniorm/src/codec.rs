//! Coercion between field values and SQL parameters and columns.
//!
//! Integers, doubles and booleans travel natively. Timestamps and decimals
//! travel as canonical text, so the column type never has to match a driver's
//! notion of a temporal or numeric type. The tables below are exhaustive over
//! [`ValueKind`]; a value that does not belong to its kind is a coercion error.

use crate::{
    driver::{ColumnRef, Cursor, Param, SqlType, Statement},
    schema::ValueKind,
    stmt::{BoundValue, Value},
    Error, Result,
};

/// Binds `bound` to the 1-based parameter `position` of `stmt`.
pub fn bind<S: Statement>(stmt: &mut S, position: usize, bound: BoundValue) -> Result<()> {
    let param = to_param(bound)?;
    stmt.bind_at(position, param)
}

/// Converts a bound value to its SQL parameter form.
///
/// | kind | null | value |
/// |---|---|---|
/// | `Int32`, `Int32Nullable` | integer NULL | integer |
/// | `Float64` | error | double |
/// | `Float64Nullable` | double NULL | double |
/// | `Text` | varchar NULL | text |
/// | `BoolAsInt` | integer NULL | boolean |
/// | `Timestamp` | varchar NULL | `yyyy-MM-dd HH:mm:ss` text |
/// | `DecimalText` | numeric NULL | exact decimal text |
pub fn to_param(bound: BoundValue) -> Result<Param> {
    let BoundValue { kind, value } = bound;

    let param = match kind {
        ValueKind::Int32 | ValueKind::Int32Nullable => match value {
            Value::Null => Param::Null(SqlType::Integer),
            Value::I32(v) => Param::Integer(v.into()),
            value => return Err(mismatch(kind, &value)),
        },
        ValueKind::Float64 => match value {
            Value::F64(v) => Param::Double(v),
            value => return Err(mismatch(kind, &value)),
        },
        ValueKind::Float64Nullable => match value {
            Value::Null => Param::Null(SqlType::Double),
            Value::F64(v) => Param::Double(v),
            value => return Err(mismatch(kind, &value)),
        },
        ValueKind::Text => match value {
            Value::Null => Param::Null(SqlType::Varchar),
            Value::String(v) => Param::Text(v),
            value => return Err(mismatch(kind, &value)),
        },
        ValueKind::BoolAsInt => match value {
            Value::Null => Param::Null(SqlType::Integer),
            Value::Bool(v) => Param::Bool(v),
            value => return Err(mismatch(kind, &value)),
        },
        ValueKind::Timestamp => match value {
            // Not a temporal NULL: the column holds text
            Value::Null => Param::Null(SqlType::Varchar),
            Value::DateTime(v) => Param::Text(Value::format_timestamp(&v)),
            value => return Err(mismatch(kind, &value)),
        },
        ValueKind::DecimalText => match value {
            Value::Null => Param::Null(SqlType::Numeric),
            Value::Decimal(v) => Param::Text(Value::format_decimal(&v)),
            value => return Err(mismatch(kind, &value)),
        },
    };

    Ok(param)
}

/// Reads `column` of the cursor's current row as a value of `kind`.
///
/// Nullable kinds consult the cursor's was-null flag. `Int32` and `Float64`
/// read NULL as zero, and `BoolAsInt` reads it as `false`.
pub fn fetch<C: Cursor>(cursor: &mut C, column: ColumnRef<'_>, kind: ValueKind) -> Result<Value> {
    let value = match kind {
        ValueKind::Int32 => Value::I32(to_i32(cursor.get_integer(column)?, column)?),
        ValueKind::Int32Nullable => {
            let v = cursor.get_integer(column)?;
            if cursor.was_null() {
                Value::Null
            } else {
                Value::I32(to_i32(v, column)?)
            }
        }
        ValueKind::Float64 => Value::F64(cursor.get_double(column)?),
        ValueKind::Float64Nullable => {
            let v = cursor.get_double(column)?;
            if cursor.was_null() {
                Value::Null
            } else {
                Value::F64(v)
            }
        }
        ValueKind::Text => {
            let v = cursor.get_text(column)?;
            if cursor.was_null() {
                Value::Null
            } else {
                Value::String(v)
            }
        }
        ValueKind::BoolAsInt => Value::Bool(cursor.get_integer(column)? > 0),
        ValueKind::Timestamp => {
            let v = cursor.get_text(column)?;
            if cursor.was_null() {
                Value::Null
            } else {
                Value::DateTime(Value::parse_timestamp(&v)?)
            }
        }
        ValueKind::DecimalText => {
            let v = cursor.get_text(column)?;
            if cursor.was_null() {
                Value::Null
            } else {
                Value::Decimal(Value::parse_decimal(&v)?)
            }
        }
    };

    Ok(value)
}

fn to_i32(v: i64, column: ColumnRef<'_>) -> Result<i32> {
    i32::try_from(v)
        .map_err(|_| Error::coercion(format!("column {column} value {v} does not fit in Int32")))
}

fn mismatch(kind: ValueKind, value: &Value) -> Error {
    Error::coercion(format!("cannot bind {} as {kind}", value.type_name()))
}
