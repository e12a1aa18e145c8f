//! Global notice state for transient, auto-dismissing notifications.
//!
//! DESIGN
//! ======
//! A single slot holds the most recent notice; publishing replaces it and
//! bumps a sequence number. Dismissal is keyed on that number so a timer
//! armed for an older notice cannot dismiss a newer one.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use std::time::Duration;

/// How long a notice stays on screen before it dismisses itself.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// A user-visible notification with one or more detail lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Short heading shown above the messages.
    pub title: String,
    /// Every message carried by the triggering outcome, in order.
    pub messages: Vec<String>,
}

impl Notice {
    /// Notice for application-level errors returned by the login operation.
    pub fn login_errors(messages: Vec<String>) -> Self {
        Self {
            title: "Sign-in error".to_owned(),
            messages,
        }
    }

    /// Notice for a request that failed before producing an outcome.
    pub fn connection_error(detail: String) -> Self {
        Self {
            title: "Connection error".to_owned(),
            messages: vec![detail],
        }
    }
}

/// Shared notice slot provided via context at the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticesState {
    /// The notice currently on screen, if any.
    pub current: Option<Notice>,
    /// Bumped on every publish; identifies the displayed notice.
    pub seq: u64,
}

impl NoticesState {
    /// Replace the current notice and invalidate any pending dismissal.
    pub fn publish(&mut self, notice: Notice) {
        self.seq += 1;
        self.current = Some(notice);
    }

    /// Clear the slot if `seq` still identifies the displayed notice.
    pub fn dismiss_if_current(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }

    /// Clear the slot unconditionally (user-initiated dismissal).
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
