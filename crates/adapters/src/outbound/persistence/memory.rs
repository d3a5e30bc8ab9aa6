//! In-memory implementation for account repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use application::error::{Result, ToInternal};
use application::ports::outbound::AccountRepository;
use domain::identity::account::Account;
use domain::identity::id::AccountId;

use super::PersistenceError;

/// Process-local account repository.
///
/// Records keep their insertion order. Login uniqueness is enforced here,
/// on insert and on update, so concurrent renames cannot both win.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    /// Create a new, empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Account>>> {
        self.accounts
            .read()
            .map_err(|_| PersistenceError::Poisoned)
            .catch()
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Account>>> {
        self.accounts
            .write()
            .map_err(|_| PersistenceError::Poisoned)
            .catch()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn add(&self, account: Account) -> Result<Account> {
        let mut accounts = self.write()?;

        if accounts.iter().any(|stored| stored.login() == account.login()) {
            return Err(PersistenceError::DuplicateLogin(
                account.login().to_string(),
            ))
            .catch();
        }

        accounts.push(account.clone());
        Ok(account)
    }

    fn update(&self, account: Account) -> Result<Account> {
        let mut accounts = self.write()?;

        if accounts.iter().any(|stored| {
            stored.id() != account.id() && stored.login() == account.login()
        }) {
            return Err(PersistenceError::DuplicateLogin(
                account.login().to_string(),
            ))
            .catch();
        }

        let Some(stored) =
            accounts.iter_mut().find(|stored| stored.id() == account.id())
        else {
            return Err(PersistenceError::UnknownAccount(account.id())).catch();
        };

        *stored = account.clone();
        Ok(account)
    }

    fn delete(&self, id: &AccountId) -> Result<bool> {
        let mut accounts = self.write()?;

        match accounts.iter().position(|stored| stored.id() == *id) {
            Some(index) => {
                // `remove`, not `swap_remove`: order matters to listings.
                accounts.remove(index);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    fn find_by_login(&self, login: &str) -> Result<Option<Account>> {
        Ok(self
            .read()?
            .iter()
            .find(|stored| stored.login().as_str() == login)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.read()?.clone())
    }

    fn exists(&self, login: &str) -> Result<bool> {
        Ok(self
            .read()?
            .iter()
            .any(|stored| stored.login().as_str() == login))
    }
}
