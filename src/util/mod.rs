//! Small browser-facing utilities.

pub mod nav;
