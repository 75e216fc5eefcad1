//! SQLite-backed key-value gateway.
//!
//! # Responsibility
//! - Map the gateway get/set contract onto the `kv_store` table.
//! - Reject connections that have not been migrated.
//!
//! # Invariants
//! - `set` is an upsert; one row per key at all times.

use super::{StorageError, StorageGateway, StorageResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Key-value gateway over a migrated SQLite connection.
pub struct SqliteStorageGateway<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorageGateway<'conn> {
    /// Wraps a connection after verifying schema version and table layout.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known by this binary.
    /// - `MissingRequiredTable` when `kv_store` is absent.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(StorageError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(StorageError::MissingRequiredTable("kv_store"));
        }

        Ok(Self { conn })
    }
}

impl StorageGateway for SqliteStorageGateway<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
