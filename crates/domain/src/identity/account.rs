//! Account domain entity.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::auth::password::Password;
use crate::identity::gender::Gender;
use crate::identity::id::AccountId;
use crate::identity::login::Login;
use crate::identity::name::Name;

/// Represents a registered account within the system domain.
///
/// Identity, privilege and creation stamps are fixed once built (see
/// [`crate::identity::builder::AccountBuilder`]); everything else changes
/// through the methods below so that modification stamps stay consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub(crate) id: AccountId,
    pub(crate) login: Login,
    pub(crate) password: Password,
    pub(crate) name: Name,
    pub(crate) gender: Gender,
    pub(crate) birthday: Option<NaiveDate>,
    pub(crate) is_admin: bool,
    pub(crate) created_on: DateTime<Utc>,
    pub(crate) created_by: String,
    pub(crate) modified_on: Option<DateTime<Utc>>,
    pub(crate) modified_by: String,
    pub(crate) revoked_on: Option<DateTime<Utc>>,
    pub(crate) revoked_by: Option<String>,
}

impl Account {
    #[inline]
    pub fn id(&self) -> AccountId {
        self.id
    }

    #[inline]
    pub fn login(&self) -> &Login {
        &self.login
    }

    #[inline]
    pub fn password(&self) -> &Password {
        &self.password
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[inline]
    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    #[inline]
    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    #[inline]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    #[inline]
    pub fn modified_on(&self) -> Option<DateTime<Utc>> {
        self.modified_on
    }

    #[inline]
    pub fn modified_by(&self) -> &str {
        &self.modified_by
    }

    #[inline]
    pub fn revoked_on(&self) -> Option<DateTime<Utc>> {
        self.revoked_on
    }

    #[inline]
    pub fn revoked_by(&self) -> Option<&str> {
        self.revoked_by.as_deref()
    }

    /// An account is active until it is revoked.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.revoked_on.is_none()
    }

    /// Age in full years on `today`, `0` without a birthday.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        self.birthday
            .map(|birthday| years_between(birthday, today))
            .unwrap_or_default()
    }

    /// Replaces the profile. The name is kept when `name` is `None`; gender
    /// and birthday are always applied.
    pub fn update_profile(
        &mut self,
        name: Option<Name>,
        gender: Gender,
        birthday: Option<NaiveDate>,
        now: DateTime<Utc>,
        by: &str,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        self.gender = gender;
        self.birthday = birthday;
        self.touch(now, by);
    }

    pub fn change_password(
        &mut self,
        password: Password,
        now: DateTime<Utc>,
        by: &str,
    ) {
        self.password = password;
        self.touch(now, by);
    }

    /// Renames the account. Uniqueness is the store's concern.
    pub fn change_login(&mut self, login: Login, now: DateTime<Utc>, by: &str) {
        self.login = login;
        self.touch(now, by);
    }

    /// Stamps a modification made by `by` at `now`.
    fn touch(&mut self, now: DateTime<Utc>, by: &str) {
        self.modified_on = Some(now);
        self.modified_by = by.to_owned();
    }

    /// Soft deletes the account.
    pub fn revoke(&mut self, now: DateTime<Utc>, by: &str) {
        self.revoked_on = Some(now);
        self.revoked_by = Some(by.to_owned());
        self.touch(now, by);
    }

    /// Lifts a soft delete. Restoring an active account only stamps it.
    pub fn restore(&mut self, now: DateTime<Utc>, by: &str) {
        self.revoked_on = None;
        self.revoked_by = None;
        self.touch(now, by);
    }
}

/// Full years elapsed from `birthday` to `today`.
///
/// One year is subtracted while the birthday's month and day have not been
/// reached yet in `today`'s year. Future birthdays give a negative value.
pub fn years_between(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        years - 1
    } else {
        years
    }
}
