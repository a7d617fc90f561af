//! SQLite-backed durable slot.
//!
//! # Responsibility
//! - Persist slot values in the `kv_slots` table across process restarts.
//!
//! # Invariants
//! - One row per key; `set` is an upsert that refreshes `updated_at`.
//! - The connection must come from `db::open_db*` so the table exists.

use super::{PersistenceSlot, SlotResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot stored in a migrated SQLite connection.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Wraps a connection returned by `open_db` or `open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns the underlying connection for inspection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl PersistenceSlot for SqliteSlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteSlot;
    use crate::db::open_db_in_memory;
    use crate::slot::PersistenceSlot;

    fn slot() -> SqliteSlot {
        SqliteSlot::new(open_db_in_memory().expect("in-memory db should open"))
    }

    #[test]
    fn missing_key_reads_as_none() {
        let value = slot().get("absent").expect("read should succeed");
        assert_eq!(value, None);
    }

    #[test]
    fn set_upserts_single_row() {
        let mut slot = slot();
        slot.set("k", "first").expect("first write should succeed");
        slot.set("k", "second").expect("second write should succeed");

        let value = slot.get("k").expect("read should succeed");
        assert_eq!(value.as_deref(), Some("second"));
        let rows: i64 = slot
            .connection()
            .query_row("SELECT COUNT(*) FROM kv_slots;", [], |row| row.get(0))
            .expect("count query should succeed");
        assert_eq!(rows, 1);
    }
}
