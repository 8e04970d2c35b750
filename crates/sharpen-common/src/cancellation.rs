//! Cooperative cancellation.
//!
//! A `CancellationToken` is a shared flag that long-running work polls at
//! each step. Observing it produces `Cancelled`, which callers propagate with
//! `?` as a distinct outcome rather than a failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, polled cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is never cancelled by anyone else.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Return `Err(Cancelled)` once cancellation has been requested.
    #[inline]
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// The operation observed its cancellation token and discarded its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("operation was cancelled")
    }
}

impl std::error::Error for Cancelled {}

#[cfg(test)]
#[path = "../tests/cancellation_tests.rs"]
mod cancellation_tests;
