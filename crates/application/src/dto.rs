//! Data Transfer Objects for the application layer.
//!
//! DTOs are used to transfer data between layers without exposing domain
//! entities. [`AccountDto`] is the only shape in which an account leaves the
//! application, and it never carries the password.

use chrono::{DateTime, NaiveDate, Utc};
use domain::identity::account::Account;
use domain::identity::gender::Gender;
use domain::identity::id::AccountId;
use serde::{Deserialize, Serialize};

/// Request DTO for account creation.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequestDto {
    /// Unique login, `[A-Za-z0-9]+`.
    pub login: String,
    /// Password, `[A-Za-z0-9]+`.
    pub password: String,
    /// Display name, Latin or Cyrillic letters.
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    pub birthday: Option<NaiveDate>,
    /// Whether the new account is an administrator.
    #[serde(default)]
    pub is_admin: bool,
}

impl std::fmt::Debug for CreateAccountRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountRequestDto")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("gender", &self.gender)
            .field("birthday", &self.birthday)
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// Request DTO for profile update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequestDto {
    /// Login of the account to update.
    pub login: String,
    /// New display name; kept as is when `None`.
    pub name: Option<String>,
    /// Always applied.
    #[serde(default)]
    pub gender: Gender,
    /// Always applied: `None` clears the birthday.
    pub birthday: Option<NaiveDate>,
}

/// Outward-facing view of an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: AccountId,
    pub login: String,
    pub name: String,
    pub gender: Gender,
    pub birthday: Option<NaiveDate>,
    pub is_admin: bool,
    pub created_on: DateTime<Utc>,
    pub created_by: String,
    pub modified_on: Option<DateTime<Utc>>,
    pub modified_by: String,
    pub revoked_on: Option<DateTime<Utc>>,
    pub revoked_by: Option<String>,
    pub is_active: bool,
    pub age: i32,
}

impl AccountDto {
    /// Projects an [`Account`], deriving its age on `today`.
    pub fn project(account: &Account, today: NaiveDate) -> Self {
        Self {
            id: account.id(),
            login: account.login().to_string(),
            name: account.name().to_string(),
            gender: account.gender(),
            birthday: account.birthday(),
            is_admin: account.is_admin(),
            created_on: account.created_on(),
            created_by: account.created_by().to_owned(),
            modified_on: account.modified_on(),
            modified_by: account.modified_by().to_owned(),
            revoked_on: account.revoked_on(),
            revoked_by: account.revoked_by().map(str::to_owned),
            is_active: account.is_active(),
            age: account.age_on(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use domain::auth::password::Password;
    use domain::identity::builder::AccountBuilder;
    use domain::identity::login::Login;
    use domain::identity::name::Name;

    use super::*;

    #[test]
    fn test_projection_has_no_password() {
        let created_on = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let account = AccountBuilder::new(created_on, "root")
            .login(Login::parse("alice123").unwrap())
            .password(Password::parse("Secret1").unwrap())
            .name(Name::parse("Alice").unwrap())
            .gender(Gender::Female)
            .birthday(NaiveDate::from_ymd_opt(2000, 6, 15))
            .build();

        let dto = AccountDto::project(
            &account,
            NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
        );
        assert_eq!(dto.login, "alice123");
        assert_eq!(dto.age, 23);
        assert!(dto.is_active);

        let json = serde_json::to_value(&dto).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!json.to_string().contains("Secret1"));
        assert_eq!(object["isAdmin"], false);
        assert_eq!(object["gender"], "female");
        assert_eq!(object["birthday"], "2000-06-15");
        assert_eq!(object["createdBy"], "root");
        assert_eq!(object["revokedOn"], serde_json::Value::Null);
    }

    #[test]
    fn test_create_request_debug_is_redacted() {
        let request: CreateAccountRequestDto = serde_json::from_str(
            r#"{"login":"alice123","password":"Secret1","name":"Alice"}"#,
        )
        .unwrap();

        assert_eq!(request.gender, Gender::Unknown);
        assert!(!request.is_admin);
        assert!(!format!("{request:?}").contains("Secret1"));
    }
}
