use super::Value;
use crate::{Error, Result};

use bigdecimal::BigDecimal;
use std::str::FromStr;

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl TryFrom<Value> for BigDecimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(value) => Ok(value),
            _ => Err(Error::type_conversion(&value, "BigDecimal")),
        }
    }
}

impl Value {
    /// Exact string form of a decimal. Parsing it back yields an equal value
    /// with the same scale.
    pub fn format_decimal(value: &BigDecimal) -> String {
        value.to_string()
    }

    pub fn parse_decimal(text: &str) -> Result<BigDecimal> {
        BigDecimal::from_str(text.trim())
            .map_err(|err| Error::coercion(format!("`{text}` is not a decimal: {err}")))
    }
}
