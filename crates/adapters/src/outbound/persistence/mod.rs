//! Persistence adapters.

pub mod memory;

pub use memory::InMemoryAccountRepository;

use domain::identity::id::AccountId;

/// Errors raised by persistence adapters.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("login `{0}` is already stored")]
    DuplicateLogin(String),
    #[error("no account stored with id {0}")]
    UnknownAccount(AccountId),
    #[error("account store lock is poisoned")]
    Poisoned,
}
