//! Capsule builder service.
//!
//! # Responsibility
//! - Turn validated submissions into persisted capsules.
//! - Delegate persistence to a `CapsuleStore` implementation.
//!
//! # Invariants
//! - Rejected submissions leave the store untouched.
//! - A successful submission appends exactly one capsule and persists the
//!   full updated sequence.
//! - The quote is selected before the capsule is assembled; it never changes
//!   afterwards.

use crate::model::capsule::{generate_id, validate_submission, Capsule, ValidationError};
use crate::quote::QuoteSelector;
use crate::store::{CapsuleStore, StoreError};
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submission input collected by the compose view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub title: String,
    pub message: String,
    /// Advisory open date; stored as entered, never enforced.
    pub date_to_open: Option<NaiveDate>,
}

/// Failure modes for `CapsuleService::submit`.
#[derive(Debug)]
pub enum SubmitError {
    /// Input rejected; nothing was created or persisted.
    Validation(ValidationError),
    /// The capsule was assembled but could not be persisted.
    Store(StoreError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "could not save capsule: {err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Builds capsules on top of a store implementation.
pub struct CapsuleService<S: CapsuleStore> {
    store: S,
    selector: QuoteSelector,
}

impl<S: CapsuleStore> CapsuleService<S> {
    /// Creates a service with the default 2-second quote delay.
    pub fn new(store: S) -> Self {
        Self::with_selector(store, QuoteSelector::default())
    }

    /// Creates a service with a caller-provided selector (tests use a
    /// zero-delay one).
    pub fn with_selector(store: S, selector: QuoteSelector) -> Self {
        Self { store, selector }
    }

    /// Returns the full stored sequence, oldest first.
    pub fn list(&self) -> Vec<Capsule> {
        self.store.load()
    }

    /// Validates the request, enriches it with a quote, and appends the
    /// resulting capsule to the persisted sequence.
    ///
    /// # Contract
    /// - `ValidationError` leaves the store untouched.
    /// - On success the persisted sequence grows by exactly one, at the end.
    pub async fn submit(&self, request: &SubmitRequest) -> Result<Capsule, SubmitError> {
        if let Err(err) = validate_submission(&request.title, &request.message) {
            warn!("event=capsule_submit module=service status=rejected error={err}");
            return Err(err.into());
        }

        let quote = self.selector.select().await;
        let created_at = Utc::now();
        let capsule = Capsule {
            id: generate_id(created_at),
            title: request.title.clone(),
            message: request.message.clone(),
            ai_quote: quote.to_string(),
            date_created: created_at,
            date_to_open: request.date_to_open,
        };

        let mut capsules = self.store.load();
        capsules.push(capsule.clone());
        self.store.save(&capsules)?;

        info!(
            "event=capsule_submit module=service status=ok id={} total={}",
            capsule.id,
            capsules.len()
        );
        Ok(capsule)
    }
}
