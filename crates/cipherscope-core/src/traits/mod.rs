//! Shared traits.

pub mod cancellation;
pub mod deadline;

pub use cancellation::{Cancellable, CancellationToken};
pub use deadline::Deadline;
