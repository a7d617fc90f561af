use rusqlite::Connection;
use studynote_core::db::migrations::latest_version;
use studynote_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().expect("in-memory db should open");

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_slots");
}

#[test]
fn reopening_same_database_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("studynote.sqlite3");

    let first = open_db(&path).expect("first open should succeed");
    first
        .execute("INSERT INTO kv_slots (key, value) VALUES ('k', 'v');", [])
        .expect("insert should succeed");
    drop(first);

    let second = open_db(&path).expect("second open should succeed");
    assert_eq!(schema_version(&second), latest_version());
    let value: String = second
        .query_row("SELECT value FROM kv_slots WHERE key = 'k';", [], |row| {
            row.get(0)
        })
        .expect("row should survive reopen");
    assert_eq!(value, "v");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).expect("raw sqlite open should succeed");
    conn.execute_batch("PRAGMA user_version = 999;")
        .expect("user_version should be writable");
    drop(conn);

    match open_db(&path).expect_err("newer schema must be rejected") {
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
        .expect("user_version should be readable")
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
        .expect("sqlite_master should be queryable");
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
