//! Account management domain.
//!
//! Pure types and rules: no I/O, no clock, no persistence.

#![forbid(unsafe_code)]

pub mod auth;
pub mod error;
pub mod identity;
mod validation;
