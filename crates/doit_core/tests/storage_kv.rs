use doit_core::storage::migrations::latest_version;
use doit_core::storage::{
    open_store, open_store_in_memory, LocalStore, SqliteLocalStore, StorageError,
};
use rusqlite::Connection;

#[test]
fn open_store_in_memory_applies_all_migrations() {
    let conn = open_store_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv");
}

#[test]
fn opening_same_store_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doit.db");

    let conn_first = open_store(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_store(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "kv");
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_store(&path).unwrap_err();
    match err {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn kv_set_get_remove_round_trip() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteLocalStore::new(&conn);

    assert_eq!(store.get("missing").unwrap(), None);

    store.set("greeting", "hello").unwrap();
    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));

    store.set("greeting", "replaced").unwrap();
    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("replaced"));

    store.remove("greeting").unwrap();
    assert_eq!(store.get("greeting").unwrap(), None);

    // Removing an absent key is a no-op.
    store.remove("greeting").unwrap();
}

#[test]
fn values_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doit.db");

    {
        let conn = open_store(&path).unwrap();
        SqliteLocalStore::new(&conn).set("durable", "yes").unwrap();
    }

    let conn = open_store(&path).unwrap();
    assert_eq!(
        SqliteLocalStore::new(&conn).get("durable").unwrap().as_deref(),
        Some("yes")
    );
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
