//! Explicit state for one scan-and-confirm cycle.
//!
//! An image or manual entry moves through Decoding/LookingUp, a successful
//! lookup parks the result in the pending slot, and only an explicit
//! confirmation makes it permanent.

use serde::Serialize;

use crate::models::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Decoding,
    LookingUp,
    Pending,
}

/// At most one pending record at a time. A new decode/lookup cycle replaces
/// it on success and leaves it alone on failure.
#[derive(Debug, Default)]
pub struct ScanSession {
    phase: Phase,
    pending: Option<Book>,
}

impl ScanSession {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<&Book> {
        self.pending.as_ref()
    }

    pub fn begin_decoding(&mut self) {
        self.phase = Phase::Decoding;
    }

    pub fn begin_lookup(&mut self) {
        self.phase = Phase::LookingUp;
    }

    /// Park a looked-up record for confirmation, silently replacing any
    /// previous pending record.
    pub fn hold(&mut self, book: Book) {
        if let Some(replaced) = &self.pending {
            tracing::debug!(
                old = %replaced.isbn,
                new = %book.isbn,
                "replacing pending record"
            );
        }
        self.pending = Some(book);
        self.phase = Phase::Pending;
    }

    /// Return to a stable phase after a cycle that produced nothing.
    pub fn settle(&mut self) {
        self.phase = if self.pending.is_some() {
            Phase::Pending
        } else {
            Phase::Idle
        };
    }

    /// Drop the pending record and go back to idle.
    pub fn clear(&mut self) -> Option<Book> {
        self.phase = Phase::Idle;
        self.pending.take()
    }
}
