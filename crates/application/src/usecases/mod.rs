//! Application services implementing business logic.

pub mod accounts;

pub use accounts::*;
