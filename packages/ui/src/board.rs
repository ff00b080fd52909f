//! # Board view-model — local mirror of the remote feedback collection
//!
//! [`BoardViewModel`] mediates between the presentation components and a
//! [`FeedbackStore`]. It owns no state itself: everything the UI renders lives in a
//! [`BoardState`] reached through a [`StateCell`], which is a Dioxus `Signal` in the
//! app and an `Rc<RefCell<_>>` in tests. No borrow of the state is held across an
//! `.await`.
//!
//! ## Consistency
//!
//! The local collection is never patched. Every successful mutation is followed by a
//! full [`refresh`](BoardViewModel::refresh) that replaces the collection wholesale
//! (refetch-after-write). This is only sensible while the collection is small.
//!
//! ## Concurrency
//!
//! There is no mutation guard and no busy flag: the submit button stays live while a
//! request is pending. If two mutations overlap, each triggers its own refresh and the
//! listings land in arrival order, so an older listing can overwrite a newer one until
//! the next refresh. Nothing cancels, de-duplicates, or versions requests.
//!
//! ## Status messages
//!
//! | Situation | Level | Text |
//! |-----------|-------|------|
//! | empty field | Error | "Please fill all fields." |
//! | bad email | Error | "Invalid email format." |
//! | create succeeded | Success | "Feedback submitted successfully!" (cleared after a delay) |
//! | create failed | Error | "Submission failed. Please try again." |
//! | delete failed | Error | "Could not delete feedback." |
//! | listing failed | Error | "Could not load feedback." |
//! | listing unreadable | Error | "Could not read feedback from the server." |

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use store::{
    validate_draft, FeedbackCollection, FeedbackDraft, FeedbackEntry, FeedbackId, FeedbackStore,
    StoreError, ValidationError,
};

pub const SUBMITTED: &str = "Feedback submitted successfully!";
pub const SUBMIT_FAILED: &str = "Submission failed. Please try again.";
pub const DELETE_FAILED: &str = "Could not delete feedback.";
pub const LOAD_FAILED: &str = "Could not load feedback.";
pub const UNREADABLE: &str = "Could not read feedback from the server.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
}

impl StatusLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusLevel::Success => "status status--success",
            StatusLevel::Error => "status status--error",
        }
    }
}

/// User-facing message about the last operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    /// Identifies this message so a delayed clear cannot remove a newer one.
    pub serial: u64,
}

/// Everything the board renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub collection: FeedbackCollection,
    pub draft: FeedbackDraft,
    pub status: Option<StatusMessage>,
    /// Whether a listing has been received at least once.
    pub loaded: bool,
    next_serial: u64,
}

impl BoardState {
    /// Replace the status message and return its serial.
    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) -> u64 {
        self.next_serial += 1;
        self.status = Some(StatusMessage {
            level,
            text: text.into(),
            serial: self.next_serial,
        });
        self.next_serial
    }

    /// Clear the status if it is still the message identified by `serial`.
    pub fn clear_status(&mut self, serial: u64) -> bool {
        match &self.status {
            Some(status) if status.serial == serial => {
                self.status = None;
                true
            }
            _ => false,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}

/// Shared, mutable access to a [`BoardState`].
pub trait StateCell: Clone {
    fn with_state<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R;
}

impl StateCell for Rc<RefCell<BoardState>> {
    fn with_state<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl StateCell for Signal<BoardState> {
    fn with_state<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        f(&self.peek())
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// Source of submission timestamps.
pub trait Clock {
    /// Current instant as ISO-8601 UTC with millisecond precision.
    fn now_iso8601(&self) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Result of [`BoardViewModel::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation; nothing was sent.
    Rejected(ValidationError),
    /// The store refused or never answered; the draft is untouched.
    Failed(StoreError),
    /// The entry was created. `status` is the serial of the success message.
    Submitted { id: Option<FeedbackId>, status: u64 },
}

/// Create / list / delete against a store, reflected into board state.
#[derive(Clone)]
pub struct BoardViewModel<S, C, K = SystemClock> {
    store: S,
    state: C,
    clock: K,
}

impl<S: FeedbackStore, C: StateCell> BoardViewModel<S, C, SystemClock> {
    pub fn new(store: S, state: C) -> Self {
        Self::with_clock(store, state, SystemClock)
    }
}

impl<S: FeedbackStore, C: StateCell, K: Clock> BoardViewModel<S, C, K> {
    pub fn with_clock(store: S, state: C, clock: K) -> Self {
        Self { store, state, clock }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn set_name(&self, value: String) {
        self.state.update(|s| s.draft.name = value);
    }

    pub fn set_email(&self, value: String) {
        self.state.update(|s| s.draft.email = value);
    }

    pub fn set_comment(&self, value: String) {
        self.state.update(|s| s.draft.comment = value);
    }

    pub fn clear_status(&self, serial: u64) {
        self.state.update(|s| s.clear_status(serial));
    }

    /// Re-read the whole collection and replace the local copy.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        let listing = self.store.list_entries().await;
        self.state.update(|s| match &listing {
            Ok(collection) => {
                s.collection = collection.clone();
                s.loaded = true;
            }
            Err(StoreError::MalformedResponse(_)) => {
                s.collection.clear();
                s.loaded = true;
                s.set_status(StatusLevel::Error, UNREADABLE);
            }
            Err(_) => {
                s.set_status(StatusLevel::Error, LOAD_FAILED);
            }
        });
        if let Err(e) = &listing {
            tracing::warn!("Refresh failed: {}", e);
        }
        listing.map(|_| ())
    }

    /// Validate the draft, create the entry, then refresh.
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = self.state.with_state(|s| s.draft.clone());

        if let Err(rejection) = validate_draft(&draft) {
            self.state
                .update(|s| s.set_status(StatusLevel::Error, rejection.to_string()));
            return SubmitOutcome::Rejected(rejection);
        }

        let entry = FeedbackEntry::new(&draft, self.clock.now_iso8601());
        match self.store.create_entry(&entry).await {
            Ok(id) => {
                let status = self.state.update(|s| {
                    s.draft.clear();
                    s.set_status(StatusLevel::Success, SUBMITTED)
                });
                // A failed refresh reports itself through the status line.
                let _ = self.refresh().await;
                SubmitOutcome::Submitted { id, status }
            }
            Err(e) => {
                tracing::error!("Submitting feedback failed: {}", e);
                self.state
                    .update(|s| s.set_status(StatusLevel::Error, SUBMIT_FAILED));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Delete an entry, then refresh whether or not the delete succeeded.
    pub async fn remove(&self, id: &FeedbackId) -> Result<(), StoreError> {
        let deleted = self.store.delete_entry(id).await;
        if let Err(e) = &deleted {
            tracing::error!("Deleting feedback {} failed: {}", id, e);
            self.state
                .update(|s| s.set_status(StatusLevel::Error, DELETE_FAILED));
        }
        let _ = self.refresh().await;
        deleted
    }
}
