//! Account management use case implementation.

use domain::auth::caller::Caller;
use domain::auth::invariants::{
    require_admin, require_owner_or_admin, validate_credentials,
};
use domain::auth::password::Password;
use domain::error::DomainError;
use domain::identity::account::Account;
use domain::identity::builder::AccountBuilder;
use domain::identity::login::Login;
use domain::identity::name::Name;

use crate::dto::{AccountDto, CreateAccountRequestDto, UpdateProfileRequestDto};
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::ManageAccounts;
use crate::ports::outbound::{AccountRepository, Clock, TelemetryPort};

/// Account management use case service.
pub struct AccountUseCase {
    account_repo: Box<dyn AccountRepository>,
    telemetry: Box<dyn TelemetryPort>,
    clock: Box<dyn Clock>,
}

impl AccountUseCase {
    pub fn new(
        account_repo: Box<dyn AccountRepository>,
        telemetry: Box<dyn TelemetryPort>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            telemetry,
            clock,
        }
    }

    fn project(&self, account: &Account) -> AccountDto {
        AccountDto::project(account, self.clock.today())
    }

    /// Loads an account by login, revoked or not.
    fn find(&self, login: &str) -> Result<Account> {
        self.account_repo
            .find_by_login(login)?
            .ok_or(ApplicationError::UserNotFound)
    }

    fn admin_only(
        &self,
        caller: &Caller,
        operation: &str,
        reason: &'static str,
    ) -> Result<()> {
        require_admin(caller, reason).map_err(|err| {
            self.telemetry.record_access_denied(caller.login(), operation);
            err.into()
        })
    }

    fn owner_or_admin(
        &self,
        caller: &Caller,
        target: &Account,
        operation: &str,
    ) -> Result<()> {
        require_owner_or_admin(caller, target).map_err(|err| {
            self.telemetry.record_access_denied(caller.login(), operation);
            err.into()
        })
    }
}

impl ManageAccounts for AccountUseCase {
    fn create_account(
        &self,
        caller: &Caller,
        request: CreateAccountRequestDto,
    ) -> Result<AccountDto> {
        self.admin_only(
            caller,
            "create_account",
            "only administrators can create accounts",
        )?;

        let login = Login::parse(request.login)?;
        let password = Password::parse(request.password)?;
        let name = Name::parse(request.name)?;

        if self.account_repo.exists(login.as_str())? {
            return Err(ApplicationError::LoginTaken);
        }

        let account = AccountBuilder::new(self.clock.now(), caller.login())
            .login(login)
            .password(password)
            .name(name)
            .gender(request.gender)
            .birthday(request.birthday)
            .admin(request.is_admin)
            .build();

        let account = self.account_repo.add(account)?;
        self.telemetry
            .record_account_created(account.login().as_str(), caller.login());

        Ok(self.project(&account))
    }

    fn update_profile(
        &self,
        caller: &Caller,
        request: UpdateProfileRequestDto,
    ) -> Result<AccountDto> {
        let mut account = self.find(&request.login)?;
        self.owner_or_admin(caller, &account, "update_profile")?;

        let name = request.name.map(Name::parse).transpose()?;
        account.update_profile(
            name,
            request.gender,
            request.birthday,
            self.clock.now(),
            caller.login(),
        );

        let account = self.account_repo.update(account)?;
        self.telemetry.record_account_updated(
            account.login().as_str(),
            caller.login(),
            "profile",
        );

        Ok(self.project(&account))
    }

    fn change_password(
        &self,
        caller: &Caller,
        login: &str,
        new_password: &str,
    ) -> Result<AccountDto> {
        let mut account = self.find(login)?;
        self.owner_or_admin(caller, &account, "change_password")?;

        let password = Password::parse(new_password)?;
        account.change_password(password, self.clock.now(), caller.login());

        let account = self.account_repo.update(account)?;
        self.telemetry.record_account_updated(
            account.login().as_str(),
            caller.login(),
            "password",
        );

        Ok(self.project(&account))
    }

    fn change_login(
        &self,
        caller: &Caller,
        old_login: &str,
        new_login: &str,
    ) -> Result<AccountDto> {
        let mut account = self.find(old_login)?;
        self.owner_or_admin(caller, &account, "change_login")?;

        let new_login = Login::parse(new_login)?;
        // Renaming to the current login is a collision too.
        if self.account_repo.exists(new_login.as_str())? {
            return Err(ApplicationError::LoginTaken);
        }

        account.change_login(new_login, self.clock.now(), caller.login());

        let account = self.account_repo.update(account)?;
        self.telemetry.record_account_updated(
            account.login().as_str(),
            caller.login(),
            "login",
        );

        Ok(self.project(&account))
    }

    fn list_active_accounts(&self, caller: &Caller) -> Result<Vec<AccountDto>> {
        self.admin_only(
            caller,
            "list_active_accounts",
            "only administrators can list accounts",
        )?;

        let mut accounts: Vec<Account> = self
            .account_repo
            .find_all()?
            .into_iter()
            .filter(Account::is_active)
            .collect();
        // Stable: ties keep insertion order.
        accounts.sort_by_key(Account::created_on);

        let today = self.clock.today();
        Ok(accounts
            .iter()
            .map(|account| AccountDto::project(account, today))
            .collect())
    }

    fn get_by_login(&self, caller: &Caller, login: &str) -> Result<AccountDto> {
        self.admin_only(
            caller,
            "get_by_login",
            "only administrators can look accounts up",
        )?;

        let account = self.find(login)?;
        Ok(self.project(&account))
    }

    fn authenticate(&self, login: &str, password: &str) -> Result<AccountDto> {
        let Some(account) = self.account_repo.find_by_login(login)? else {
            self.telemetry.record_auth_failure("unknown_login");
            return Err(DomainError::InvalidCredentials.into());
        };

        if let Err(err) = validate_credentials(&account, password) {
            let reason = match err {
                DomainError::InvalidCredentials => "invalid_password",
                _ => "account_revoked",
            };
            self.telemetry.record_auth_failure(reason);
            return Err(err.into());
        }

        self.telemetry.record_auth_success(account.login().as_str());
        Ok(self.project(&account))
    }

    fn list_older_than(
        &self,
        caller: &Caller,
        age: i32,
    ) -> Result<Vec<AccountDto>> {
        self.admin_only(
            caller,
            "list_older_than",
            "only administrators can list accounts",
        )?;

        // No active filter here, unlike `list_active_accounts`.
        let today = self.clock.today();
        Ok(self
            .account_repo
            .find_all()?
            .iter()
            .filter(|account| account.age_on(today) > age)
            .map(|account| AccountDto::project(account, today))
            .collect())
    }

    fn delete_account(
        &self,
        caller: &Caller,
        login: &str,
        soft_delete: bool,
    ) -> Result<bool> {
        self.admin_only(
            caller,
            "delete_account",
            "only administrators can delete accounts",
        )?;

        let mut account = self.find(login)?;

        if soft_delete {
            account.revoke(self.clock.now(), caller.login());
            let account = self.account_repo.update(account)?;
            self.telemetry.record_account_revoked(
                account.login().as_str(),
                caller.login(),
            );
            Ok(true)
        } else {
            let removed = self.account_repo.delete(&account.id())?;
            self.telemetry.record_account_deleted(
                &account.id().to_string(),
                caller.login(),
                removed,
            );
            Ok(removed)
        }
    }

    fn restore_account(
        &self,
        caller: &Caller,
        login: &str,
    ) -> Result<AccountDto> {
        self.admin_only(
            caller,
            "restore_account",
            "only administrators can restore accounts",
        )?;

        let mut account = self.find(login)?;
        account.restore(self.clock.now(), caller.login());

        let account = self.account_repo.update(account)?;
        self.telemetry
            .record_account_restored(account.login().as_str(), caller.login());

        Ok(self.project(&account))
    }
}
