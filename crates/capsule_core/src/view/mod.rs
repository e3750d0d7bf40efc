//! View state machine.
//!
//! # Responsibility
//! - Hold the whole UI state in one explicit context object: current mode,
//!   draft input, busy flag, pending notice.
//! - Enforce the only legal transitions between `Browsing` and `Composing`.
//!
//! # Invariants
//! - `busy` is true exactly between `begin_save` and `finish_save`.
//! - While busy, no transition is accepted; resubmission is impossible.
//! - A successful save clears the draft and returns to `Browsing`; a
//!   validation failure keeps the draft and stays in `Composing`.

use crate::model::capsule::Capsule;
use crate::service::capsule_service::SubmitError;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod render;

/// The two view modes. No other states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Card grid plus the "write" action.
    Browsing,
    /// Input form plus save/cancel.
    Composing,
}

/// Unsaved compose input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub message: String,
    pub open_date: Option<NaiveDate>,
}

/// Rejected open-date entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftDateError {
    /// Input did not parse as `YYYY-MM-DD`.
    Unparseable(String),
    /// Date lies before today; the picker forbids past dates.
    InPast(NaiveDate),
}

impl Display for DraftDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparseable(input) => write!(f, "`{input}` is not a date (expected YYYY-MM-DD)"),
            Self::InPast(date) => write!(f, "open date {date} is in the past"),
        }
    }
}

impl Error for DraftDateError {}

impl Draft {
    /// Sets the advisory open date from raw input.
    ///
    /// Blank input clears the date. Past dates are rejected, mirroring the
    /// date-picker minimum of the browse UI.
    pub fn set_open_date(&mut self, input: &str, today: NaiveDate) -> Result<(), DraftDateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.open_date = None;
            return Ok(());
        }

        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| DraftDateError::Unparseable(trimmed.to_string()))?;
        if date < today {
            return Err(DraftDateError::InPast(date));
        }

        self.open_date = Some(date);
        Ok(())
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One-shot user feedback, consumed by the frontend after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Error(String),
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saved => write!(f, "Your memory capsule has been saved!"),
            Self::Error(message) => write!(f, "{message}"),
        }
    }
}

/// The single state-machine context object driving the UI.
#[derive(Debug)]
pub struct ViewState {
    pub mode: Mode,
    pub draft: Draft,
    pub busy: bool,
    notice: Option<Notice>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: Mode::Browsing,
            draft: Draft::default(),
            busy: false,
            notice: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browsing -> Composing. Ignored in any other state.
    pub fn begin_compose(&mut self) {
        if self.mode == Mode::Browsing {
            self.mode = Mode::Composing;
        }
    }

    /// Composing -> Browsing, discarding the draft. Ignored while busy.
    pub fn cancel_compose(&mut self) {
        if self.mode == Mode::Composing && !self.busy {
            self.draft.clear();
            self.mode = Mode::Browsing;
        }
    }

    /// Marks a submission as in flight.
    ///
    /// Returns `false` (and changes nothing) outside `Composing` or while a
    /// submission is already pending; the caller must not submit then.
    pub fn begin_save(&mut self) -> bool {
        if self.mode != Mode::Composing || self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Applies the outcome of the in-flight submission.
    ///
    /// Success clears the draft and returns to `Browsing`; failure keeps the
    /// draft and stays in `Composing`. Either way the busy flag drops.
    pub fn finish_save(&mut self, outcome: &Result<Capsule, SubmitError>) {
        self.busy = false;
        match outcome {
            Ok(_) => {
                self.draft.clear();
                self.mode = Mode::Browsing;
                self.notice = Some(Notice::Saved);
            }
            Err(err) => {
                self.notice = Some(Notice::Error(err.to_string()));
            }
        }
    }

    /// Takes the pending notice, if any. Each notice is surfaced once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
