//! Application-level errors.

use domain::error::DomainError;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors that can occur in the application layer.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("user not found")]
    UserNotFound,
    #[error("user with this login already exists")]
    LoginTaken,

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification of an [`ApplicationError`], for transports to map
/// onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Forbidden,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    InvalidCredentials,
    Internal,
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }

    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::ValidationFailed { .. }) => {
                ErrorKind::InvalidArgument
            },
            Self::Domain(DomainError::Forbidden(_)) => ErrorKind::Forbidden,
            Self::Domain(DomainError::InvalidCredentials) => {
                ErrorKind::InvalidCredentials
            },
            Self::UserNotFound => ErrorKind::NotFound,
            Self::LoginTaken => ErrorKind::AlreadyExists,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| ApplicationError::Internal(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err: ApplicationError = DomainError::invalid("login", "bad").into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: ApplicationError = DomainError::Forbidden("no").into();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        let err: ApplicationError = DomainError::InvalidCredentials.into();
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);

        assert_eq!(ApplicationError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ApplicationError::LoginTaken.kind(), ErrorKind::AlreadyExists);

        let io = std::io::Error::other("disk on fire");
        let err = Err::<(), _>(io).catch().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_validation_message_names_field() {
        let err: ApplicationError =
            DomainError::invalid("name", "must only contain letters").into();
        assert_eq!(err.to_string(), "invalid name: must only contain letters");
    }
}
