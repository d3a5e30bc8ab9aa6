//! Boundaries of the application.

pub mod inbound;
pub mod outbound;
