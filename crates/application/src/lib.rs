//! Account management application layer.
//!
//! Use cases orchestrate the domain rules around the ports declared in
//! [`ports`]. Adapters live in their own crate.

#![forbid(unsafe_code)]

pub mod dto;
pub mod error;
pub mod ports;
pub mod usecases;
