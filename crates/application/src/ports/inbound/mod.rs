//! These traits define what the application can do.

pub mod accounts;

pub use accounts::*;
