//! Typed builder for `Account`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::auth::password::Password;
use crate::identity::account::Account;
use crate::identity::gender::Gender;
use crate::identity::id::AccountId;
use crate::identity::login::Login;
use crate::identity::name::Name;

/// Marker type for missing value.
#[derive(Debug)]
pub struct Missing;

/// Marker type for present value.
#[derive(Debug)]
pub struct Present<T>(pub T);

/// A builder to track presence of `Login`, `Password` and `Name`.
///
/// Creation stamps are taken up front; `build` only exists once all three
/// required values are set.
#[derive(Debug)]
pub struct AccountBuilder<L, P, N> {
    login: L,
    password: P,
    name: N,
    gender: Gender,
    birthday: Option<NaiveDate>,
    is_admin: bool,
    created_on: DateTime<Utc>,
    created_by: String,
}

impl AccountBuilder<Missing, Missing, Missing> {
    /// Creates a new [`AccountBuilder`] for an account created by `by` at
    /// `on`, with all required fields initialized as [`Missing`].
    pub fn new(on: DateTime<Utc>, by: impl Into<String>) -> Self {
        Self {
            login: Missing,
            password: Missing,
            name: Missing,
            gender: Gender::default(),
            birthday: None,
            is_admin: false,
            created_on: on,
            created_by: by.into(),
        }
    }
}

impl<P, N> AccountBuilder<Missing, P, N> {
    /// Sets account login using [`Login`] value object.
    pub fn login(self, login: Login) -> AccountBuilder<Present<Login>, P, N> {
        AccountBuilder {
            login: Present(login),
            password: self.password,
            name: self.name,
            gender: self.gender,
            birthday: self.birthday,
            is_admin: self.is_admin,
            created_on: self.created_on,
            created_by: self.created_by,
        }
    }
}

impl<L, N> AccountBuilder<L, Missing, N> {
    /// Sets account password using [`Password`] value object.
    pub fn password(
        self,
        password: Password,
    ) -> AccountBuilder<L, Present<Password>, N> {
        AccountBuilder {
            login: self.login,
            password: Present(password),
            name: self.name,
            gender: self.gender,
            birthday: self.birthday,
            is_admin: self.is_admin,
            created_on: self.created_on,
            created_by: self.created_by,
        }
    }
}

impl<L, P> AccountBuilder<L, P, Missing> {
    /// Sets account display name using [`Name`] value object.
    pub fn name(self, name: Name) -> AccountBuilder<L, P, Present<Name>> {
        AccountBuilder {
            login: self.login,
            password: self.password,
            name: Present(name),
            gender: self.gender,
            birthday: self.birthday,
            is_admin: self.is_admin,
            created_on: self.created_on,
            created_by: self.created_by,
        }
    }
}

impl<L, P, N> AccountBuilder<L, P, N> {
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn birthday(mut self, birthday: Option<NaiveDate>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Grants administrator privilege. Cannot be changed afterward.
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

impl AccountBuilder<Present<Login>, Present<Password>, Present<Name>> {
    /// Finalizes build with a freshly generated [`AccountId`].
    pub fn build(self) -> Account {
        let AccountBuilder {
            login: Present(login),
            password: Present(password),
            name: Present(name),
            gender,
            birthday,
            is_admin,
            created_on,
            created_by,
        } = self;

        Account {
            id: AccountId::generate(),
            login,
            password,
            name,
            gender,
            birthday,
            is_admin,
            created_on,
            modified_by: created_by.clone(),
            created_by,
            modified_on: None,
            revoked_on: None,
            revoked_by: None,
        }
    }
}
