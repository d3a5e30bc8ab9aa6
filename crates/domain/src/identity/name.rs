//! Display name logic management.

use std::fmt;

use crate::error::{DomainError, Result};
use crate::validation::is_letters;

/// Value object of a display name.
///
/// Only Latin and Cyrillic letters are allowed: no digits, spaces or
/// punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Converts a [`String`] into a valid [`Name`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is empty or contains a character which is
    /// neither a Latin nor a Cyrillic letter.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_letters(&name) {
            return Err(DomainError::invalid(
                "name",
                "must only contain latin or cyrillic letters",
            ));
        }

        Ok(Self(name))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name() {
        assert!(Name::parse("Alice").is_ok());
        assert!(Name::parse("Фёдор").is_ok());

        for bad in ["", "\t", "Alice2", "Jean-Luc", "Ann Lee", "Bob."] {
            let err = Name::parse(bad).unwrap_err();
            assert!(
                matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "name"),
                "{bad:?} should be rejected"
            );
        }
    }
}
