//! Authorization invariants.
//!
//! Every check here runs before any write.

use crate::auth::caller::Caller;
use crate::error::{DomainError, Result};
use crate::identity::account::Account;

/// Validates that the caller is an administrator.
pub fn require_admin(caller: &Caller, reason: &'static str) -> Result<()> {
    if !caller.is_admin() {
        return Err(DomainError::Forbidden(reason));
    }
    Ok(())
}

/// Validates that the caller may modify `target`.
///
/// Administrators may modify any account. Anyone else only their own,
/// and only while it is active.
pub fn require_owner_or_admin(caller: &Caller, target: &Account) -> Result<()> {
    if caller.is_admin() {
        return Ok(());
    }

    if target.login.as_str() != caller.login() || !target.is_active() {
        return Err(DomainError::Forbidden(
            "only administrators or the active owner can modify this account",
        ));
    }
    Ok(())
}

/// Validates that a credential check may succeed for `account`.
///
/// The password is compared first so a revoked account with a wrong
/// password still reads as bad credentials.
pub fn validate_credentials(account: &Account, password: &str) -> Result<()> {
    if !account.password.matches(password) {
        return Err(DomainError::InvalidCredentials);
    }

    if !account.is_active() {
        return Err(DomainError::Forbidden("account is revoked"));
    }
    Ok(())
}
