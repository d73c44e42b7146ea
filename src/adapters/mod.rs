//! Adapters layer: concrete implementations of the ports.

pub mod analytics;
pub mod lead_capture;
