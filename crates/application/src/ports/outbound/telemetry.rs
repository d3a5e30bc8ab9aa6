//! Interface for observability.

/// Port for telemetry/observability operations.
///
/// Implementations must not receive credentials: only logins, identifiers
/// and reasons are passed.
pub trait TelemetryPort: Send + Sync {
    /// Record a successful authentication.
    fn record_auth_success(&self, login: &str);

    /// Record a failed authentication attempt.
    fn record_auth_failure(&self, reason: &str);

    /// Record a refused operation.
    fn record_access_denied(&self, caller: &str, operation: &str);

    /// Record a new account creation.
    fn record_account_created(&self, login: &str, by: &str);

    /// Record a profile, password or login change.
    fn record_account_updated(&self, login: &str, by: &str, change: &str);

    /// Record a soft delete.
    fn record_account_revoked(&self, login: &str, by: &str);

    /// Record a restoration.
    fn record_account_restored(&self, login: &str, by: &str);

    /// Record a hard delete.
    fn record_account_deleted(&self, id: &str, by: &str, removed: bool);
}
