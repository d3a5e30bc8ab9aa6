//! Authorization domain.

pub mod caller;
pub mod invariants;
pub mod password;
