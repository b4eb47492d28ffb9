//! Typed errors surfaced by the session subsystem.
//!
//! Every failure either reaches the caller as one of these variants or
//! changes session state; nothing is silently swallowed.

use thiserror::Error;

/// Error taxonomy for outbound API calls and session operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The credential service rejected the request (bad credentials,
    /// duplicate email, weak password, ...). Surfaced verbatim to the
    /// initiating screen and never retried automatically.
    #[error("{0}")]
    Validation(String),

    /// Refresh could not restore a valid access credential. Terminal:
    /// local credentials are already cleared when this is returned.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Transport-level failure. Treated like an explicit rejection; not
    /// retried by this subsystem.
    #[error("network error: {0}")]
    Network(String),
}
