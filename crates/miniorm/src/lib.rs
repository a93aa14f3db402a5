pub mod codec;

mod engine;
pub use engine::{Builder, Engine, RowErrorPolicy};

mod entity;
pub use entity::Entity;

mod load;
pub use load::{Load, Projection};

mod primitive;
pub use primitive::Primitive;

pub use miniorm_core::{bail, driver, err, schema, stmt, Error, Result};

#[cfg(test)]
mod fake;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Entity, Error, Primitive, Result};
    pub use miniorm_core::{
        schema::{ColumnDescriptor, EntityDescriptor},
        stmt::{Value, ValueRecord},
    };
}
