//! Telemetry adapters - Observability implementations.

use application::ports::outbound::TelemetryPort;

/// Tracing-based telemetry adapter.
#[derive(Default)]
pub struct TracingTelemetry;

impl TracingTelemetry {
    /// Create a new [`TracingTelemetry`].
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryPort for TracingTelemetry {
    fn record_auth_success(&self, login: &str) {
        tracing::info!(login = login, "authentication successful");
    }

    fn record_auth_failure(&self, reason: &str) {
        tracing::info!(reason = reason, "authentication failed");
    }

    fn record_access_denied(&self, caller: &str, operation: &str) {
        tracing::warn!(caller = caller, operation = operation, "access denied");
    }

    fn record_account_created(&self, login: &str, by: &str) {
        tracing::info!(login = login, by = by, "account created");
    }

    fn record_account_updated(&self, login: &str, by: &str, change: &str) {
        tracing::info!(login = login, by = by, change = change, "account updated");
    }

    fn record_account_revoked(&self, login: &str, by: &str) {
        tracing::info!(login = login, by = by, "account revoked");
    }

    fn record_account_restored(&self, login: &str, by: &str) {
        tracing::info!(login = login, by = by, "account restored");
    }

    fn record_account_deleted(&self, id: &str, by: &str, removed: bool) {
        if removed {
            tracing::info!(id = id, by = by, "account deleted");
        } else {
            tracing::warn!(
                id = id,
                by = by,
                "account vanished before it could be deleted"
            );
        }
    }
}
