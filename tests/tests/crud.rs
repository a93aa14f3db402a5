use miniorm::Entity;
use pretty_assertions::assert_eq;
use tests::setup;

const PERSON: &str = "CREATE TABLE person (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT,
    age INTEGER,
    score REAL,
    active INTEGER
)";

miniorm::entity! {
    #[table = "person"]
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Person {
        #[id]
        id: Option<i32> = "id",
        name: String = "full_name",
        age: Option<i32> = "age",
        score: Option<f64> = "score",
        active: bool = "active",
    }
}

fn ada() -> Person {
    Person {
        id: None,
        name: "Ada Lovelace".to_string(),
        age: Some(36),
        score: Some(9.5),
        active: true,
    }
}

#[test]
fn insert_then_get_round_trips() {
    let engine = setup(&[PERSON]);
    let mut person = ada();

    engine.insert(&mut person).unwrap();
    let id = person.id.unwrap();

    let read: Vec<Person> = engine
        .get(&format!("select * from person where id = {id}"))
        .unwrap();

    assert_eq!(read, [person]);
}

#[test]
fn generated_identities_increase() {
    let engine = setup(&[PERSON]);

    let mut first = ada();
    let mut second = ada();
    engine.insert(&mut first).unwrap();
    engine.insert(&mut second).unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
}

#[test]
fn nullable_fields_round_trip_as_null() {
    let engine = setup(&[PERSON]);
    let mut person = Person {
        age: None,
        score: None,
        ..ada()
    };

    engine.insert(&mut person).unwrap();

    let nulls: Vec<i32> = engine
        .get("select count(*) from person where age is null and score is null")
        .unwrap();
    assert_eq!(nulls, [1]);

    let read: Vec<Person> = engine.get("select * from person").unwrap();
    assert_eq!(read[0].age, None);
    assert_eq!(read[0].score, None);
}

#[test]
fn update_rewrites_non_identity_columns() {
    let engine = setup(&[PERSON]);
    let mut person = ada();
    engine.insert(&mut person).unwrap();

    person.name = "Augusta Ada King".to_string();
    person.age = None;
    person.active = false;
    engine.update(&person).unwrap();

    let read: Vec<Person> = engine.get("select * from person").unwrap();
    assert_eq!(read, [person]);
}

#[test]
fn update_of_missing_row_is_not_an_error() {
    let engine = setup(&[PERSON]);
    let ghost = Person {
        id: Some(99),
        ..ada()
    };

    engine.update(&ghost).unwrap();

    let count: Vec<i32> = engine.get("select count(*) from person").unwrap();
    assert_eq!(count, [0]);
}

#[test]
fn delete_removes_only_the_identified_row() {
    let engine = setup(&[PERSON]);

    let mut keep = ada();
    let mut remove = ada();
    engine.insert(&mut keep).unwrap();
    engine.insert(&mut remove).unwrap();

    engine.delete(&remove).unwrap();

    let ids: Vec<i32> = engine.get("select id from person order by id").unwrap();
    assert_eq!(ids, [keep.id.unwrap()]);
}

#[test]
fn bool_reads_any_positive_integer_as_true() {
    let engine = setup(&[PERSON]);

    engine
        .execute("INSERT INTO person (id, full_name, active) VALUES (1, 'a', 2), (2, 'b', 0), (3, 'c', NULL)")
        .unwrap();

    let read: Vec<Person> = engine.get("select * from person order by id").unwrap();
    let active: Vec<_> = read.iter().map(|p| p.active).collect();
    assert_eq!(active, [true, false, false]);
}

#[test]
fn columns_are_matched_by_name_not_position() {
    let engine = setup(&[PERSON]);
    let mut person = ada();
    engine.insert(&mut person).unwrap();

    let read: Vec<Person> = engine
        .get("select active, score, age, full_name, id from person")
        .unwrap();
    assert_eq!(read, [person]);
}

#[test]
fn scalar_targets_read_the_first_column() {
    let engine = setup(&[PERSON]);

    for name in ["a", "b", "c"] {
        let mut person = Person {
            name: name.to_string(),
            ..ada()
        };
        engine.insert(&mut person).unwrap();
    }

    let count: Vec<i32> = engine.get("select count(*) from person").unwrap();
    assert_eq!(count, [3]);

    let names: Vec<String> = engine
        .get("select full_name, id from person order by id desc")
        .unwrap();
    assert_eq!(names, ["c", "b", "a"]);

    let ages: Vec<Option<i32>> = engine
        .get("select max(age) from person where id > 100")
        .unwrap();
    assert_eq!(ages, [None]);
}

#[test]
fn empty_result_is_empty_vec() {
    let engine = setup(&[PERSON]);

    let read: Vec<Person> = engine.get("select * from person").unwrap();
    assert!(read.is_empty());
}

#[test]
fn descriptor_matches_declaration() {
    let schema = Person::schema().unwrap();

    assert_eq!(schema.table_name(), "person");
    assert_eq!(schema.identity().column_name, "id");

    let columns: Vec<_> = schema.columns().map(|c| c.column_name.as_str()).collect();
    assert_eq!(columns, ["full_name", "age", "score", "active"]);
}
