use crate::{schema::ValueKind, stmt::Value, Result};

use bigdecimal::BigDecimal;
use jiff::civil::DateTime;

/// A field type that maps onto a single column.
pub trait Primitive: Sized {
    /// Coercion rule for columns holding this type.
    const KIND: ValueKind;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ($ty:ty, $kind:ident) => {
        impl Primitive for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn load(value: Value) -> Result<Self> {
                value.try_into()
            }

            fn to_value(&self) -> Value {
                Value::from(self.clone())
            }
        }
    };
}

impl_primitive!(i32, Int32);
impl_primitive!(f64, Float64);
impl_primitive!(String, Text);
impl_primitive!(bool, BoolAsInt);
impl_primitive!(DateTime, Timestamp);
impl_primitive!(BigDecimal, DecimalText);

impl<T: Primitive> Primitive for Option<T> {
    const KIND: ValueKind = T::KIND.nullable();

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
