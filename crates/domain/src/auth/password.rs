//! Password logic.

use crate::error::{DomainError, Result};
use crate::validation::is_alphanumeric;

/// Value object of a password.
///
/// Stored as given: comparison is plain equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new [`Password`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the password is empty or contains anything other
    /// than `[A-Za-z0-9]`.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !is_alphanumeric(&value) {
            return Err(DomainError::invalid(
                "password",
                "must only contain latin letters and digits",
            ));
        }

        Ok(Self(value))
    }

    /// Whether `candidate` is exactly this password.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}
