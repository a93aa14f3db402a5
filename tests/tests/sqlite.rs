use miniorm::Engine;
use miniorm_driver_sqlite::Sqlite;

#[test]
fn in_memory_url() {
    assert_eq!(Sqlite::new("sqlite::memory:").unwrap(), Sqlite::InMemory);
    assert_eq!(Sqlite::in_memory().url(), "sqlite::memory:");
}

#[test]
fn rejects_foreign_schemes() {
    let err = Sqlite::new("postgresql://localhost/app").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Sqlite::new("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn file_database_persists_across_connections() {
    tests::init_logging();

    let path = std::env::temp_dir().join(format!("miniorm-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let sqlite = Sqlite::open(&path);
    assert_eq!(Sqlite::new(sqlite.url()).unwrap(), sqlite);

    {
        let engine = Engine::new(sqlite.connect().unwrap());
        engine
            .execute("CREATE TABLE kv (id INTEGER PRIMARY KEY, v TEXT)")
            .unwrap();
        engine.execute("INSERT INTO kv (v) VALUES ('kept')").unwrap();
    }

    let engine = Engine::new(sqlite.connect().unwrap());
    let values: Vec<String> = engine.get("select v from kv").unwrap();
    assert_eq!(values, ["kept"]);

    drop(engine);
    std::fs::remove_file(&path).unwrap();
}
