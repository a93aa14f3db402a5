use miniorm::driver::{Param, SqlType};
use pretty_assertions::assert_eq;
use tests::setup;

const ITEM: &str = "CREATE TABLE item (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    label TEXT,
    weight REAL,
    quantity INTEGER
)";

miniorm::entity! {
    #[table = "item"]
    #[derive(Debug, Clone)]
    pub struct Item {
        #[id]
        id: Option<i32> = "id",
        label: String = "label",
        weight: Option<f64> = "weight",
        quantity: i32 = "quantity",
    }
}

fn widget() -> Item {
    Item {
        id: None,
        label: "widget".to_string(),
        weight: None,
        quantity: 4,
    }
}

#[test]
fn insert_binds_columns_in_declared_order() {
    let engine = setup(&[ITEM]);
    let mut item = widget();

    engine.insert(&mut item).unwrap();

    let conn = engine.connection();
    assert_eq!(
        conn.sql_log(),
        ["INSERT INTO item (label, weight, quantity) VALUES (?, ?, ?);"]
    );
    assert_eq!(
        conn.last_params(),
        [
            Param::Text("widget".into()),
            Param::Null(SqlType::Double),
            Param::Integer(4),
        ]
    );
}

#[test]
fn update_binds_identity_last() {
    let engine = setup(&[ITEM]);
    let mut item = widget();
    engine.insert(&mut item).unwrap();
    engine.connection().clear_log();

    item.quantity = 7;
    engine.update(&item).unwrap();

    let conn = engine.connection();
    assert_eq!(
        conn.sql_log(),
        ["UPDATE item SET label = ?, weight = ?, quantity = ? WHERE id = ?;"]
    );

    let params = conn.last_params();
    assert_eq!(params.len(), 4);
    assert_eq!(params[3], Param::Integer(item.id.unwrap().into()));
}

#[test]
fn delete_binds_identity_as_parameter() {
    let engine = setup(&[ITEM]);
    let mut item = widget();
    engine.insert(&mut item).unwrap();
    engine.connection().clear_log();

    engine.delete(&item).unwrap();

    let conn = engine.connection();
    assert_eq!(conn.sql_log(), ["DELETE FROM item WHERE id = ?;"]);
    assert_eq!(conn.last_params(), [Param::Integer(1)]);
}

#[test]
fn get_and_execute_run_sql_verbatim() {
    let engine = setup(&[ITEM]);

    engine.execute("DELETE FROM item WHERE quantity < 0").unwrap();
    let _: Vec<i32> = engine.get("SELECT count(*) FROM item").unwrap();

    assert_eq!(
        engine.connection().sql_log(),
        ["DELETE FROM item WHERE quantity < 0", "SELECT count(*) FROM item"]
    );
    assert!(engine.connection().last_params().is_empty());
}

#[test]
fn update_without_identity_executes_nothing() {
    let engine = setup(&[ITEM]);

    let err = engine.update(&widget()).unwrap_err();
    assert!(err.to_string().contains("has no identity"));
    assert!(engine.connection().sql_log().is_empty());
}
