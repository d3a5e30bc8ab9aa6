//! Custom error handler for domain (core).

pub type Result<T> = std::result::Result<T, DomainError>;

/// Enum representing custom domain errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("invalid {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("invalid login or password")]
    InvalidCredentials,
}

impl DomainError {
    /// Shorthand for a [`DomainError::ValidationFailed`] on `field`.
    pub fn invalid(field: &str, message: &str) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}
