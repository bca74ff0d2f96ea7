//! Time-bounded cancellation for key search.

use std::time::{Duration, Instant};

use super::cancellation::{Cancellable, CancellationToken};

/// A point in time after which a search should stop, combined with an
/// explicit cancellation token.
///
/// Search loops poll [`Cancellable::is_cancelled`] between iterations; a
/// decrypt in progress is never interrupted.
#[derive(Debug, Clone)]
pub struct Deadline {
    expires_at: Option<Instant>,
    token: CancellationToken,
}

impl Deadline {
    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(timeout),
            token: CancellationToken::new(),
        }
    }

    /// A deadline `seconds` from now. Non-finite or negative values mean no limit.
    pub fn after_secs_f64(seconds: f64) -> Self {
        if seconds.is_finite() && seconds >= 0.0 {
            Self::after(Duration::from_secs_f64(seconds))
        } else {
            Self::unbounded()
        }
    }

    /// A deadline that only expires when cancelled.
    pub fn unbounded() -> Self {
        Self {
            expires_at: None,
            token: CancellationToken::new(),
        }
    }

    /// Share an external token, e.g. one cancelled when a client disconnects.
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Time left before expiry, `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Cancellable for Deadline {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    fn cancel(&self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_already_expired() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.is_cancelled());
    }

    #[test]
    fn unbounded_only_expires_on_cancel() {
        let deadline = Deadline::unbounded();
        assert!(!deadline.is_cancelled());
        assert!(deadline.remaining().is_none());
        deadline.cancel();
        assert!(deadline.is_cancelled());
    }

    #[test]
    fn shared_token_cancels_deadline() {
        let token = CancellationToken::new();
        let deadline = Deadline::after(Duration::from_secs(60)).with_token(token.clone());
        assert!(!deadline.is_cancelled());
        token.cancel();
        assert!(deadline.is_cancelled());
    }

    #[test]
    fn negative_seconds_mean_no_limit() {
        assert!(Deadline::after_secs_f64(-1.0).remaining().is_none());
        assert!(Deadline::after_secs_f64(f64::NAN).remaining().is_none());
    }
}
