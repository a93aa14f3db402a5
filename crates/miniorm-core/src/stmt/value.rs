use crate::{Error, Result};

use bigdecimal::BigDecimal;

/// A native value read from or written to an entity field.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Civil date and time without a zone
    DateTime(jiff::civil::DateTime),

    /// Arbitrary-precision decimal
    Decimal(BigDecimal),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::DateTime(_) => "DateTime",
            Self::Decimal(_) => "Decimal",
            Self::Null => "Null",
        }
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

macro_rules! impl_conversions {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$name(value) => Ok(value),
                    _ => Err(Error::type_conversion(&value, $lit)),
                }
            }
        }
    };
}

impl_conversions!(bool, Bool, "bool");
impl_conversions!(i32, I32, "i32");
impl_conversions!(f64, F64, "f64");
impl_conversions!(String, String, "String");

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
