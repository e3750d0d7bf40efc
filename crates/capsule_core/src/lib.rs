//! Core domain logic for Memory Capsule.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod quote;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::capsule::{Capsule, ValidationError};
pub use quote::{QuoteSelector, DEFAULT_GENERATION_DELAY, QUOTE_POOL};
pub use service::capsule_service::{CapsuleService, SubmitError, SubmitRequest};
pub use store::{CapsuleStore, SqliteSlotStore, StoreError, StoreResult};
pub use view::{Draft, DraftDateError, Mode, Notice, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
