//! Logging helpers for audit and security events.

use tracing::Span;

/// Log a security-relevant event at WARN level
///
/// Used for rejected tokens and failed logins.
#[macro_export]
macro_rules! security_event {
    ($event:expr, $($field:tt)*) => {
        tracing::warn!(
            security.event = $event,
            $($field)*
        )
    };
}

/// Log an audit event at INFO level
///
/// Used for every change to stored records.
#[macro_export]
macro_rules! audit_event {
    ($action:expr, $resource:expr, $($field:tt)*) => {
        tracing::info!(
            audit.action = $action,
            audit.resource = $resource,
            $($field)*
        )
    };
}

/// Create a span for authentication operations
///
/// # Example
/// ```ignore
/// let span = auth_span!("login", user.name = %usuario);
/// ```
#[macro_export]
macro_rules! auth_span {
    ($event:expr, $($field:tt)*) => {
        tracing::info_span!(
            "auth",
            auth.event = $event,
            auth.success = tracing::field::Empty,
            $($field)*
        )
    };
}

/// Record authentication success/failure on the current span
pub fn record_auth_result(success: bool) {
    Span::current().record("auth.success", success);
}
