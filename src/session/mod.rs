//! Session/credential lifecycle subsystem.
//!
//! DESIGN
//! ======
//! Ownership is split so each piece stays small and testable:
//! - [`store`] owns the bearer credential pair (tab-scoped storage).
//! - [`service`] performs the credential-issuing network calls.
//! - [`context`] owns the reactive session state and its operations.
//! - [`gate`] makes the synchronous render decision for each path.
//! - [`guard`] is the idempotency token for duplicate-prone handlers.

pub mod context;
pub mod gate;
pub mod guard;
pub mod service;
pub mod store;
