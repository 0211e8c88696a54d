//! Password Gate
//!
//! Compares submitted text against the unlock phrase. A mismatch puts the gate
//! into `Error` and schedules a revert to `Idle`; any later submit supersedes
//! the pending revert, so a stale revert can never undo a `Success`.

use crate::clock::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Default unlock phrase
pub const DEFAULT_UNLOCK_PHRASE: &str = "YEN";

/// Default delay before an error reverts to idle
pub const DEFAULT_ERROR_REVERT: Duration = Duration::from_millis(600);

/// Gate status as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Idle,
    Error,
    /// Terminal for the session
    Success,
}

/// Identifies one scheduled error revert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, Copy)]
struct PendingRevert {
    ticket: RevertTicket,
    due: Instant,
}

/// Case-insensitive comparison key for phrases
pub fn normalize_phrase(input: &str) -> String {
    input.nfkc().collect::<String>().to_uppercase()
}

pub struct PasswordGate {
    phrase: String,
    input: String,
    status: GateStatus,
    revert_after: Duration,
    pending: Option<PendingRevert>,
    next_ticket: u64,
    clock: Arc<dyn Clock>,
}

impl PasswordGate {
    pub fn new(phrase: &str, revert_after: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            phrase: normalize_phrase(phrase),
            input: String::new(),
            status: GateStatus::Idle,
            revert_after,
            pending: None,
            next_ticket: 0,
            clock,
        }
    }

    pub fn with_defaults(clock: Arc<dyn Clock>) -> Self {
        Self::new(DEFAULT_UNLOCK_PHRASE, DEFAULT_ERROR_REVERT, clock)
    }

    pub fn status(&self) -> GateStatus {
        self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Update the text field without submitting
    pub fn set_input(&mut self, input: &str) {
        if self.status != GateStatus::Success {
            self.input = input.to_string();
        }
    }

    /// Evaluate `input` against the unlock phrase.
    ///
    /// Any pending revert is cancelled first. Once the gate has succeeded,
    /// further submissions are ignored.
    pub fn submit(&mut self, input: &str) -> GateStatus {
        if self.status == GateStatus::Success {
            return self.status;
        }
        self.input = input.to_string();
        self.pending = None;

        if normalize_phrase(input) == self.phrase {
            self.status = GateStatus::Success;
            info!(input_len = input.chars().count(), "Archive unlocked");
        } else {
            self.status = GateStatus::Error;
            self.next_ticket += 1;
            let ticket = RevertTicket(self.next_ticket);
            self.pending = Some(PendingRevert {
                ticket,
                due: self.clock.now() + self.revert_after,
            });
            debug!(
                input_len = input.chars().count(),
                ticket = ticket.0,
                "Password rejected"
            );
        }
        self.status
    }

    /// Currently scheduled revert, if any
    pub fn pending_revert(&self) -> Option<RevertTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Apply the revert if it is due according to the clock.
    pub fn poll(&mut self) -> GateStatus {
        if let Some(pending) = self.pending {
            if self.clock.now() >= pending.due {
                self.fire(pending.ticket);
            }
        }
        self.status
    }

    /// Fire a scheduled revert. Superseded tickets are ignored.
    pub fn fire(&mut self, ticket: RevertTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                if self.status == GateStatus::Error {
                    self.status = GateStatus::Idle;
                    debug!(ticket = ticket.0, "Password error cleared");
                }
                true
            }
            _ => false,
        }
    }

    /// Drop transient state when the gate's window closes. Success is kept.
    pub fn discard_transient(&mut self) {
        self.pending = None;
        if self.status != GateStatus::Success {
            self.status = GateStatus::Idle;
            self.input.clear();
        }
    }
}
