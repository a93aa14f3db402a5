use crate::{
    schema::{EntityDescriptor, ValueKind},
    stmt::ValueRecord,
    Entity, Primitive, Result,
};

use bigdecimal::BigDecimal;

/// How rows are read for a target type.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Every mapped column is read by name and assembled into an entity.
    Composite(EntityDescriptor),

    /// Only the first column is read and returned as a bare value.
    Scalar(ValueKind),
}

/// A type [`Engine::get`](crate::Engine::get) can produce from rows.
///
/// Implemented for every [`Entity`] and for the scalar projections `i32`,
/// `String` and `BigDecimal` (each also as `Option<_>`).
pub trait Load: Sized {
    /// Chooses the projection. Called once per query, before any row is read.
    fn projection() -> Result<Projection>;

    fn load(record: ValueRecord) -> Result<Self>;
}

impl<T: Entity> Load for T {
    fn projection() -> Result<Projection> {
        Ok(Projection::Composite(<T as Entity>::schema()?))
    }

    fn load(record: ValueRecord) -> Result<Self> {
        <T as Entity>::load(record)
    }
}

macro_rules! impl_scalar {
    ( $( $ty:ty ),* ) => {
        $(
            impl Load for $ty {
                fn projection() -> Result<Projection> {
                    Ok(Projection::Scalar(<$ty as Primitive>::KIND))
                }

                fn load(mut record: ValueRecord) -> Result<Self> {
                    <$ty as Primitive>::load(record.take(0))
                }
            }
        )*
    };
}

impl_scalar!(
    i32,
    Option<i32>,
    String,
    Option<String>,
    BigDecimal,
    Option<BigDecimal>
);
