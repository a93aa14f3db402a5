use miniorm::{
    schema::{ColumnDescriptor, EntityDescriptor, ValueKind},
    stmt::{Value, ValueRecord},
    Entity, Result, RowErrorPolicy,
};
use tests::{setup, setup_with_policy};

const EVENT: &str = "CREATE TABLE event (id INTEGER PRIMARY KEY, happened_at TEXT)";

miniorm::entity! {
    #[table = "event"]
    #[derive(Debug)]
    pub struct Event {
        #[id]
        id: i32 = "id",
        happened: jiff::civil::DateTime = "happened_at",
    }
}

const ROWS: &str = "INSERT INTO event (id, happened_at) VALUES
    (1, '2020-01-01 00:00:00'),
    (2, 'last tuesday'),
    (3, '2020-01-03 00:00:00')";

#[test]
fn unparseable_rows_are_skipped_by_default() {
    let engine = setup(&[EVENT, ROWS]);

    let events: Vec<Event> = engine.get("select * from event order by id").unwrap();

    let ids: Vec<_> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn fail_policy_returns_the_row_error() {
    let engine = setup_with_policy(&[EVENT, ROWS], RowErrorPolicy::Fail);

    let err = engine.get::<Event>("select * from event order by id").unwrap_err();

    assert!(err.is_coercion());
    assert!(err.to_string().contains("failed to load row 2"));
}

#[test]
fn malformed_sql_fails_the_call() {
    let engine = setup(&[EVENT]);

    let err = engine.get::<Event>("selec * from event").unwrap_err();
    assert!(err.is_driver_operation_failed());

    let err = engine.execute("DROP TABLE nowhere").unwrap_err();
    assert!(err.is_driver_operation_failed());
}

#[test]
fn missing_table_fails_insert() {
    let engine = setup(&[]);
    let mut event = Event {
        id: 0,
        happened: jiff::civil::date(2020, 1, 1).at(0, 0, 0, 0),
    };

    let err = engine.insert(&mut event).unwrap_err();
    assert!(err.is_driver_operation_failed());
    assert_eq!(event.id, 0);
}

#[test]
fn missing_column_is_reported() {
    let engine = setup_with_policy(&[EVENT, ROWS], RowErrorPolicy::Fail);

    let err = engine.get::<Event>("select id from event").unwrap_err();
    assert!(err.is_invalid_metadata());
}

/// An entity whose identity is not the `id` column.
#[derive(Debug)]
struct Keyed;

impl Entity for Keyed {
    fn schema() -> Result<EntityDescriptor> {
        EntityDescriptor::new(
            "keyed",
            "key",
            vec![
                ColumnDescriptor::new("key", "key_id", ValueKind::Int32),
                ColumnDescriptor::new("label", "label", ValueKind::Text),
            ],
        )
    }

    fn load(_: ValueRecord) -> Result<Self> {
        Ok(Keyed)
    }

    fn get_field(&self, _: &str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn set_field(&mut self, _: &str, _: Value) -> Result<()> {
        Ok(())
    }
}

#[test]
fn invalid_metadata_is_rejected_before_touching_the_database() {
    let engine = setup(&[]);

    let err = engine.delete(&Keyed).unwrap_err();
    assert!(err.is_invalid_metadata());

    let err = engine.get::<Keyed>("select * from keyed").unwrap_err();
    assert!(err.is_invalid_metadata());

    assert!(engine.connection().sql_log().is_empty());
}
