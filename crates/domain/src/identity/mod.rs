//! Identity domain: who an account is.

pub mod account;
pub mod builder;
pub mod gender;
pub mod id;
pub mod login;
pub mod name;
