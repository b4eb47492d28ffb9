//! Idempotency token for handlers that can fire more than once for a
//! single external event.
//!
//! The social-login callback is the known hazard: the browser can invoke
//! it twice for the same one-time code, and the second invocation must
//! not issue a second token exchange. Any such handler claims the guard
//! before doing observable work and treats a failed claim as a no-op.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::Cell;

/// One-shot claim flag scoped to a single handler instance.
#[derive(Debug, Default)]
pub struct ExchangeGuard {
    claimed: Cell<bool>,
}

impl ExchangeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard. Returns `true` exactly once; later calls return
    /// `false` until [`release`](Self::release) is called.
    pub fn claim(&self) -> bool {
        if self.claimed.get() {
            false
        } else {
            self.claimed.set(true);
            true
        }
    }

    /// Re-arm the guard so the event can be retried after a failure.
    pub fn release(&self) {
        self.claimed.set(false);
    }
}
