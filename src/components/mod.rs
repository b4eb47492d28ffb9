//! Shared components.

pub mod route_gate;
