use rusqlite::Connection;
use tasklist_core::db::migrations::latest_version;
use tasklist_core::db::{open_db, open_db_in_memory, DbError};
use tasklist_core::{SqliteStorageGateway, StorageError, StorageGateway};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_store");
}

#[test]
fn get_of_absent_key_is_none() {
    let conn = open_db_in_memory().unwrap();
    let gateway = SqliteStorageGateway::try_new(&conn).unwrap();

    assert_eq!(gateway.get("TASKS").unwrap(), None);
}

#[test]
fn set_then_get_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let mut gateway = SqliteStorageGateway::try_new(&conn).unwrap();

    gateway.set("TASKS", "[]").unwrap();
    assert_eq!(gateway.get("TASKS").unwrap().as_deref(), Some("[]"));
}

#[test]
fn set_is_an_upsert() {
    let conn = open_db_in_memory().unwrap();
    let mut gateway = SqliteStorageGateway::try_new(&conn).unwrap();

    gateway.set("TASKS", "first").unwrap();
    gateway.set("TASKS", "second").unwrap();

    assert_eq!(gateway.get("TASKS").unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn gateway_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteStorageGateway::try_new(&conn);
    match result {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn gateway_rejects_connection_without_kv_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteStorageGateway::try_new(&conn);
    assert!(matches!(
        result,
        Err(StorageError::MissingRequiredTable("kv_store"))
    ));
}

#[test]
fn value_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.db");

    {
        let conn = open_db(&path).unwrap();
        let mut gateway = SqliteStorageGateway::try_new(&conn).unwrap();
        gateway.set("TASKS", r#"[{"durable":true}]"#).unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let gateway = SqliteStorageGateway::try_new(&conn).unwrap();
    assert_eq!(
        gateway.get("TASKS").unwrap().as_deref(),
        Some(r#"[{"durable":true}]"#)
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
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
