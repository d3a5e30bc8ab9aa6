//! Account management port.

use domain::auth::caller::Caller;

use crate::dto::{AccountDto, CreateAccountRequestDto, UpdateProfileRequestDto};
use crate::error::Result;

/// Inbound port for account management.
///
/// Every operation but [`ManageAccounts::authenticate`] receives the
/// [`Caller`] explicitly. Authorization and validation always happen before
/// anything is written.
pub trait ManageAccounts: Send + Sync {
    /// Create a new account. Administrators only.
    fn create_account(
        &self,
        caller: &Caller,
        request: CreateAccountRequestDto,
    ) -> Result<AccountDto>;

    /// Update name, gender and birthday of an account.
    fn update_profile(
        &self,
        caller: &Caller,
        request: UpdateProfileRequestDto,
    ) -> Result<AccountDto>;

    /// Replace the password of an account.
    fn change_password(
        &self,
        caller: &Caller,
        login: &str,
        new_password: &str,
    ) -> Result<AccountDto>;

    /// Rename an account.
    fn change_login(
        &self,
        caller: &Caller,
        old_login: &str,
        new_login: &str,
    ) -> Result<AccountDto>;

    /// Active accounts, oldest first. Administrators only.
    fn list_active_accounts(&self, caller: &Caller) -> Result<Vec<AccountDto>>;

    /// Any account, revoked or not, by login. Administrators only.
    fn get_by_login(&self, caller: &Caller, login: &str) -> Result<AccountDto>;

    /// Check a login and password pair.
    fn authenticate(&self, login: &str, password: &str) -> Result<AccountDto>;

    /// Accounts, revoked ones included, strictly older than `age`.
    /// Administrators only.
    fn list_older_than(
        &self,
        caller: &Caller,
        age: i32,
    ) -> Result<Vec<AccountDto>>;

    /// Revoke (`soft_delete`) or permanently remove an account.
    /// Administrators only.
    fn delete_account(
        &self,
        caller: &Caller,
        login: &str,
        soft_delete: bool,
    ) -> Result<bool>;

    /// Lift a revocation. Administrators only.
    fn restore_account(
        &self,
        caller: &Caller,
        login: &str,
    ) -> Result<AccountDto>;
}
