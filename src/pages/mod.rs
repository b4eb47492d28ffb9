//! Routed screens.

pub mod agents;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod oauth_callback;
pub mod reset_password;
pub mod signup;
pub mod verify_email;
