//! Accounts is a small account manager: who may create, read, modify,
//! revoke and restore user accounts.
//!
//! This crate wires the [`application`] use cases to the [`adapters`] and
//! owns configuration and logging. Transports build on [`AppState`].

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod telemetry;

use std::sync::Arc;

use adapters::outbound::clock::SystemClock;
use adapters::outbound::persistence::InMemoryAccountRepository;
use adapters::outbound::telemetry::TracingTelemetry;
use application::dto::CreateAccountRequestDto;
use application::error::ApplicationError;
use application::ports::inbound::ManageAccounts;
use application::ports::outbound::Clock;
use application::usecases::AccountUseCase;
use domain::auth::caller::Caller;
use domain::identity::gender::Gender;

use crate::config::{Bootstrap, Configuration};
use crate::error::Result;

/// State shared by whatever serves the accounts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub accounts: Arc<dyn ManageAccounts>,
}

/// Initialize the application state.
pub fn initialize_state(config: Arc<Configuration>) -> Result<AppState> {
    initialize_state_with_clock(config, Box::new(SystemClock::new()))
}

/// Initialize the application state on a given clock.
pub fn initialize_state_with_clock(
    config: Arc<Configuration>,
    clock: Box<dyn Clock>,
) -> Result<AppState> {
    let accounts: Arc<dyn ManageAccounts> = Arc::new(AccountUseCase::new(
        Box::new(InMemoryAccountRepository::new()),
        Box::new(TracingTelemetry::new()),
        clock,
    ));

    if let Some(admin) = &config.bootstrap {
        bootstrap(accounts.as_ref(), admin)?;
    }

    tracing::info!(
        name = %config.name,
        version = config.version(),
        "account service ready"
    );

    Ok(AppState { config, accounts })
}

/// Creates the configured administrator unless its login is already taken.
///
/// Goes through the regular creation path, as the system caller.
pub fn bootstrap(accounts: &dyn ManageAccounts, admin: &Bootstrap) -> Result<()> {
    let request = CreateAccountRequestDto {
        login: admin.login.clone(),
        password: admin.password.clone(),
        name: admin.name.clone(),
        gender: Gender::Unknown,
        birthday: None,
        is_admin: true,
    };

    match accounts.create_account(&Caller::system(), request) {
        Ok(account) => {
            tracing::info!(login = %account.login, "bootstrap administrator created");
            Ok(())
        },
        Err(ApplicationError::LoginTaken) => {
            tracing::debug!(login = %admin.login, "bootstrap administrator already present");
            Ok(())
        },
        Err(err) => Err(err.into()),
    }
}
