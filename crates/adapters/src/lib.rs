//! Adapters plugging the outside world into the application ports.

#![forbid(unsafe_code)]

pub mod outbound;
