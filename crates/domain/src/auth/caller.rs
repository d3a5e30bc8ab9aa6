//! Caller context.

/// Login used when the system itself acts, e.g. at bootstrap.
pub const SYSTEM_LOGIN: &str = "system";

/// Who is performing an operation.
///
/// Established by the transport layer and passed explicitly to every
/// operation; there is no ambient "current user".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    login: String,
    is_admin: bool,
}

impl Caller {
    /// Create a new [`Caller`].
    pub fn new(login: impl Into<String>, is_admin: bool) -> Self {
        Self {
            login: login.into(),
            is_admin,
        }
    }

    /// An administrator caller.
    pub fn admin(login: impl Into<String>) -> Self {
        Self::new(login, true)
    }

    /// A regular, non-administrator caller.
    pub fn user(login: impl Into<String>) -> Self {
        Self::new(login, false)
    }

    /// The system acting as an administrator.
    pub fn system() -> Self {
        Self::admin(SYSTEM_LOGIN)
    }

    #[inline]
    pub fn login(&self) -> &str {
        &self.login
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
