//! Network layer: error taxonomy, wire types, the authorized request
//! gateway, and the feature APIs built on it.

pub mod agents;
pub mod client;
pub mod error;
pub mod types;
