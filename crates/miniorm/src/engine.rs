mod builder;
pub use builder::{Builder, RowErrorPolicy};

mod materialize;

use crate::{
    bail, codec,
    driver::{Connection, Response, Statement as _},
    err,
    schema::{ColumnDescriptor, EntityDescriptor},
    stmt::{BoundValue, Value},
    Entity, Error, Load, Result,
};

use miniorm_sql::{Serializer, Statement};

/// Maps entities to rows over a single owned connection.
///
/// Every operation derives the entity's descriptor, synthesizes its SQL, binds
/// parameters through the [`codec`] and runs the statement on the connection.
/// Failures are logged under the `miniorm` target before being returned.
///
/// The engine performs no locking; it is meant to be used from one thread.
#[derive(Debug)]
pub struct Engine<C> {
    connection: C,
    row_error_policy: RowErrorPolicy,
}

impl Engine<()> {
    /// Starts configuring an engine. The connection is supplied to
    /// [`Builder::build`].
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<C: Connection> Engine<C> {
    /// Creates an engine with default settings.
    pub fn new(connection: C) -> Self {
        Builder::default().build(connection)
    }

    /// The underlying connection, for work the engine does not cover.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn into_connection(self) -> C {
        self.connection
    }

    pub fn row_error_policy(&self) -> RowErrorPolicy {
        self.row_error_policy
    }

    /// Inserts `entity` and stores the generated identity back into it.
    ///
    /// The identity field itself is never written; the database assigns it.
    pub fn insert<T: Entity>(&self, entity: &mut T) -> Result<()> {
        report("insert", self.insert_impl(entity))
    }

    /// Writes every non-identity field of `entity` to the row it identifies.
    pub fn update<T: Entity>(&self, entity: &T) -> Result<()> {
        report("update", self.update_impl(entity))
    }

    /// Deletes the row identified by `entity`.
    pub fn delete<T: Entity>(&self, entity: &T) -> Result<()> {
        report("delete", self.delete_impl(entity))
    }

    /// Runs `sql` verbatim and loads each resulting row as a `T`.
    ///
    /// Entity targets read their columns by name; scalar targets read the
    /// first column of each row. Rows that cannot be loaded are handled
    /// according to the engine's [`RowErrorPolicy`].
    pub fn get<T: Load>(&self, sql: &str) -> Result<Vec<T>> {
        report("get", self.get_impl(sql))
    }

    /// Runs `sql` verbatim, discarding any result.
    pub fn execute(&self, sql: &str) -> Result<()> {
        report("execute", self.execute_impl(sql))
    }

    fn insert_impl<T: Entity>(&self, entity: &mut T) -> Result<()> {
        let schema = T::schema()?;
        let response = self.exec_write(&schema, &Statement::insert(&schema), entity)?;

        let Some(generated_id) = response.generated_id else {
            return Err(Error::invalid_result(format!(
                "insert into `{}` returned no generated key",
                schema.table_name()
            )));
        };

        let id = i32::try_from(generated_id).map_err(|_| {
            Error::coercion(format!(
                "generated key {generated_id} does not fit in Int32"
            ))
        })?;

        entity.set_field(&schema.identity().field_name, Value::I32(id))
    }

    fn update_impl<T: Entity>(&self, entity: &T) -> Result<()> {
        let schema = T::schema()?;
        self.exec_write(&schema, &Statement::update(&schema), entity)?;
        Ok(())
    }

    fn delete_impl<T: Entity>(&self, entity: &T) -> Result<()> {
        let schema = T::schema()?;
        self.exec_write(&schema, &Statement::delete(&schema), entity)?;
        Ok(())
    }

    fn get_impl<T: Load>(&self, sql: &str) -> Result<Vec<T>> {
        let projection = T::projection()?;

        log::debug!(target: "miniorm", "query: {sql}");

        let mut stmt = self.connection.prepare(sql)?;
        let mut cursor = stmt.execute_query()?;

        materialize::materialize(&mut cursor, &projection, self.row_error_policy)
    }

    fn execute_impl(&self, sql: &str) -> Result<()> {
        log::debug!(target: "miniorm", "execute: {sql}");

        let mut stmt = self.connection.prepare(sql)?;
        let response = stmt.execute_update()?;

        log::debug!(target: "miniorm", "{} row(s) affected", response.rows_affected);
        Ok(())
    }

    /// Serializes `stmt`, binds each placeholder from the matching field of
    /// `entity` and executes it.
    fn exec_write<T: Entity>(
        &self,
        schema: &EntityDescriptor,
        stmt: &Statement<'_>,
        entity: &T,
    ) -> Result<Response> {
        let mut params = Vec::<ColumnDescriptor>::new();
        let sql = Serializer::new().serialize(stmt, &mut params);

        log::debug!(target: "miniorm", "{sql}");

        let mut prepared = self.connection.prepare(&sql)?;

        for (index, column) in params.iter().enumerate() {
            let value = entity.get_field(&column.field_name)?;

            if value.is_null() && column.field_name == schema.identity().field_name {
                bail!(
                    "`{}` has no identity; it must be inserted first",
                    std::any::type_name::<T>()
                );
            }

            let bound = BoundValue::for_column(column, value);
            codec::bind(&mut prepared, index + 1, bound).map_err(|e| {
                e.context(err!(
                    "failed to bind field `{}` to column `{}`",
                    column.field_name,
                    column.column_name
                ))
            })?;
        }

        prepared.execute_update()
    }
}

fn report<T>(op: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log::error!(target: "miniorm", "{op} failed: {err}");
    }
    result
}
