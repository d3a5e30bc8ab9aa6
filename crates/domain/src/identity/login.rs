//! Login logic management.

use std::fmt;

use crate::error::{DomainError, Result};
use crate::validation::is_alphanumeric;

/// Value object of a valid login.
///
/// A login is made of ASCII letters and digits only, at least one of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Converts a [`String`] into a valid [`Login`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is empty or contains anything other
    /// than `[A-Za-z0-9]`.
    pub fn parse(login: impl Into<String>) -> Result<Self> {
        let login = login.into();
        if !is_alphanumeric(&login) {
            return Err(DomainError::invalid(
                "login",
                "must only contain latin letters and digits",
            ));
        }

        Ok(Self(login))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
