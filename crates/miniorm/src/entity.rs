use crate::{
    schema::EntityDescriptor,
    stmt::{Value, ValueRecord},
    Result,
};

/// A type that maps to rows of one table.
///
/// This is the metadata provider the engine consults on every operation. The
/// [`entity!`](crate::entity) macro implements it for a plain struct;
/// hand-written implementations are equally valid.
pub trait Entity: Sized {
    /// Describes the table this type maps to.
    ///
    /// Called once per engine operation; the result is not cached.
    fn schema() -> Result<EntityDescriptor>;

    /// Builds an instance from a fetched record.
    ///
    /// The record holds one value per entry of `schema().fields()`, in the
    /// same order.
    fn load(record: ValueRecord) -> Result<Self>;

    /// Reads the field named `field`.
    fn get_field(&self, field: &str) -> Result<Value>;

    /// Writes the field named `field`. Used to store generated identities.
    fn set_field(&mut self, field: &str, value: Value) -> Result<()>;
}

/// Declares a struct together with its [`Entity`] implementation.
///
/// The first field must be marked `#[id]`; it maps to the `id` column and is
/// populated by [`Engine::insert`](crate::Engine::insert). Every field names
/// its column after `=`. Field types must implement
/// [`Primitive`](crate::Primitive).
///
/// ```
/// miniorm::entity! {
///     #[table = "person"]
///     #[derive(Debug, Default, Clone, PartialEq)]
///     pub struct Person {
///         #[id]
///         id: i32 = "id",
///         name: String = "full_name",
///         age: Option<i32> = "age",
///     }
/// }
/// ```
#[macro_export]
macro_rules! entity {
    (
        #[table = $table:literal]
        $( #[$meta:meta] )*
        $vis:vis struct $name:ident {
            #[id]
            $id:ident : $id_ty:ty = $id_col:literal,
            $( $field:ident : $ty:ty = $col:literal ),* $(,)?
        }
    ) => {
        $( #[$meta] )*
        $vis struct $name {
            pub $id: $id_ty,
            $( pub $field: $ty, )*
        }

        impl $crate::codegen_support::Entity for $name {
            fn schema() -> $crate::codegen_support::Result<$crate::codegen_support::EntityDescriptor> {
                use $crate::codegen_support::{ColumnDescriptor, Primitive};

                $crate::codegen_support::EntityDescriptor::new(
                    $table,
                    ::std::stringify!($id),
                    ::std::vec![
                        ColumnDescriptor::new(::std::stringify!($id), $id_col, <$id_ty as Primitive>::KIND),
                        $( ColumnDescriptor::new(::std::stringify!($field), $col, <$ty as Primitive>::KIND), )*
                    ],
                )
            }

            fn load(
                record: $crate::codegen_support::ValueRecord,
            ) -> $crate::codegen_support::Result<Self> {
                use $crate::codegen_support::Primitive;

                let mut values = record.into_iter();

                Ok(Self {
                    $id: <$id_ty as Primitive>::load(values.next().unwrap_or_default())?,
                    $( $field: <$ty as Primitive>::load(values.next().unwrap_or_default())?, )*
                })
            }

            fn get_field(
                &self,
                field: &str,
            ) -> $crate::codegen_support::Result<$crate::codegen_support::Value> {
                use $crate::codegen_support::Primitive;

                match field {
                    ::std::stringify!($id) => Ok(Primitive::to_value(&self.$id)),
                    $( ::std::stringify!($field) => Ok(Primitive::to_value(&self.$field)), )*
                    _ => Err($crate::codegen_support::Error::invalid_metadata(::std::format!(
                        "`{}` has no field `{}`",
                        ::std::stringify!($name),
                        field
                    ))),
                }
            }

            fn set_field(
                &mut self,
                field: &str,
                value: $crate::codegen_support::Value,
            ) -> $crate::codegen_support::Result<()> {
                use $crate::codegen_support::Primitive;

                match field {
                    ::std::stringify!($id) => self.$id = Primitive::load(value)?,
                    $( ::std::stringify!($field) => self.$field = Primitive::load(value)?, )*
                    _ => {
                        return Err($crate::codegen_support::Error::invalid_metadata(::std::format!(
                            "`{}` has no field `{}`",
                            ::std::stringify!($name),
                            field
                        )))
                    }
                }

                Ok(())
            }
        }
    };
}
