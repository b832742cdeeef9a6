// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellation context supplied by callers of the bus
//!
//! A `Context` is done once it is cancelled (directly or through a parent)
//! or once its deadline has passed. The bus only observes it; creating and
//! cancelling contexts is the caller's job.

use crate::error::PublishError;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation signal with an optional deadline
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never done unless cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derive a context that is done when this one is, and can be
    /// cancelled on its own without affecting this one
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derive a child whose deadline is the earlier of ours and `now + timeout`
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        Self {
            token: self.token.child_token(),
            deadline: Some(self.deadline.map_or(candidate, |d| d.min(candidate))),
        }
    }

    /// Cancel this context and every context derived from it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once cancelled or expired
    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// Why the context is done, or `None` while it is still active
    ///
    /// Explicit cancellation wins over an expired deadline.
    pub fn err(&self) -> Option<PublishError> {
        if self.token.is_cancelled() {
            return Some(PublishError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(PublishError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Wait until the context is done
    pub async fn done(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// Wait until the context is done and report why
    pub async fn cancelled(&self) -> PublishError {
        self.done().await;
        self.err().unwrap_or(PublishError::Canceled)
    }
}

impl From<CancellationToken> for Context {
    fn from(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
