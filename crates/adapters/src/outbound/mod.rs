//! Outbound adapters.

pub mod clock;
pub mod persistence;
pub mod telemetry;
