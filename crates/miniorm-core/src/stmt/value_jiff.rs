use super::Value;
use crate::{Error, Result};

use jiff::civil::DateTime;

/// Text layout of timestamps on the wire: `yyyy-MM-dd HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl TryFrom<Value> for DateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(value) => Ok(value),
            _ => Err(Error::type_conversion(&value, "DateTime")),
        }
    }
}

impl Value {
    /// Formats a timestamp as wire text. Sub-second precision is dropped.
    pub fn format_timestamp(value: &DateTime) -> String {
        value.strftime(TIMESTAMP_FORMAT).to_string()
    }

    /// Parses wire text produced by [`Value::format_timestamp`].
    pub fn parse_timestamp(text: &str) -> Result<DateTime> {
        DateTime::strptime(TIMESTAMP_FORMAT, text)
            .map_err(|err| Error::coercion(format!("`{text}` is not a timestamp: {err}")))
    }
}
