//! SQLite-backed slot storage.
//!
//! # Invariants
//! - The connection must come from `open_db`/`open_db_in_memory` (checked in
//!   `try_new`).
//! - Writes are single-statement upserts, so a failed write never leaves a
//!   half-written slot.

use super::slot::{SlotError, SlotResult, SlotStorage};
use crate::db::migrations::{current_user_version, latest_version};
use rusqlite::{params, Connection, OptionalExtension};

const SLOT_TABLE: &str = "storage_slots";

/// Slot storage persisted in the `storage_slots` table.
pub struct SqliteSlotStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStorage<'conn> {
    /// Wraps a bootstrapped connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when the slot table is absent.
    pub fn try_new(conn: &'conn Connection) -> SlotResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version < expected_version {
            return Err(SlotError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_table: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [SLOT_TABLE],
            |row| row.get(0),
        )?;
        if has_table == 0 {
            return Err(SlotError::MissingRequiredTable(SLOT_TABLE));
        }

        Ok(Self { conn })
    }

    /// Lists stored slot keys in ascending order.
    pub fn keys(&self) -> SlotResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM storage_slots ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl SlotStorage for SqliteSlotStorage<'_> {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO storage_slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> SlotResult<()> {
        self.conn
            .execute("DELETE FROM storage_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
