//! Stop flag shared by the key searches of one request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by search loops between candidate keys.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    /// Ask every holder of the flag to stop at its next poll.
    fn cancel(&self);
}

/// Clones share one flag, so a token handed to the worker pool stops every
/// engine of a recovery tier at once. Cancellation cannot be undone.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}
