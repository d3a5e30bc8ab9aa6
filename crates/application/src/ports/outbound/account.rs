//! Account repository port.

use domain::identity::account::Account;
use domain::identity::id::AccountId;

use crate::error::Result;

/// Port for account persistence operations.
///
/// Lookups are keyed by login and are not scoped to active accounts: a
/// revoked account is still found and still holds its login.
pub trait AccountRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// Must fail rather than overwrite when the login is already stored.
    fn add(&self, account: Account) -> Result<Account>;

    /// Replace an existing account, matched by identifier.
    fn update(&self, account: Account) -> Result<Account>;

    /// Permanently remove an account.
    ///
    /// Returns whether a record was found and removed.
    fn delete(&self, id: &AccountId) -> Result<bool>;

    /// Find an account by login.
    fn find_by_login(&self, login: &str) -> Result<Option<Account>>;

    /// Every stored account, revoked ones included, in insertion order.
    fn find_all(&self) -> Result<Vec<Account>>;

    /// Whether an account holds this login.
    fn exists(&self, login: &str) -> Result<bool>;
}
