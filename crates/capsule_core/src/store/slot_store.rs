//! SQLite-backed single-slot capsule store.
//!
//! # Responsibility
//! - Persist the whole capsule sequence as one JSON payload in a named slot.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - One slot row per store; `save` replaces the payload in one statement.
//! - `load` never fails: corruption is logged and read as empty.

use super::{CapsuleStore, StoreError, StoreResult};
use crate::db::{open_db, open_db_in_memory};
use crate::model::capsule::Capsule;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Slot name holding the capsule sequence.
pub const CAPSULES_SLOT: &str = "memoryCapsules";

/// SQLite-backed store keeping the full sequence in one named slot.
pub struct SqliteSlotStore {
    conn: Connection,
    slot: &'static str,
}

impl SqliteSlotStore {
    /// Opens (or creates) the store at the given database file path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
            slot: CAPSULES_SLOT,
        })
    }

    /// Opens an in-memory store. State is lost when the store is dropped.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
            slot: CAPSULES_SLOT,
        })
    }

    fn read_payload(&self) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE name = ?1;",
                [self.slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }
}

impl CapsuleStore for SqliteSlotStore {
    fn load(&self) -> Vec<Capsule> {
        let payload = match self.read_payload() {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=store_load module=store status=degraded reason=read_failed error={err}");
                return Vec::new();
            }
        };

        let Some(text) = payload else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Capsule>>(&text) {
            Ok(capsules) => capsules,
            Err(err) => {
                // Corrupt payload stays in place until the next save overwrites it.
                warn!(
                    "event=store_load module=store status=degraded reason=malformed_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, capsules: &[Capsule]) -> StoreResult<()> {
        let payload = serde_json::to_string(capsules).map_err(StoreError::Serialize)?;
        self.conn.execute(
            "INSERT INTO slots (name, payload) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.slot, payload],
        )?;
        info!(
            "event=store_save module=store status=ok slot={} count={}",
            self.slot,
            capsules.len()
        );
        Ok(())
    }
}
