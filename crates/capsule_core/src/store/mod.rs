//! Capsule store contracts.
//!
//! # Responsibility
//! - Define the persistence boundary for the ordered capsule sequence.
//! - Keep the storage mechanism swappable behind one trait.
//!
//! # Invariants
//! - The stored sequence is append-only; callers persist the full sequence.
//! - Missing or malformed persisted state degrades to an empty sequence,
//!   never to an error (load side only).

use crate::db::DbError;
use crate::model::capsule::Capsule;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod slot_store;

pub use slot_store::{SqliteSlotStore, CAPSULES_SLOT};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the save path.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize capsules: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence boundary for the ordered capsule sequence.
pub trait CapsuleStore {
    /// Reads the persisted sequence.
    ///
    /// Absent, unreadable or malformed state yields an empty sequence; the
    /// degradation is logged, not reported.
    fn load(&self) -> Vec<Capsule>;

    /// Overwrites the persisted sequence, atomically from the caller's
    /// perspective.
    fn save(&self, capsules: &[Capsule]) -> StoreResult<()>;
}
