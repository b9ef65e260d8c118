//! Failures raised by the remote subscription authority.

/// Errors the authoritative remote check can fail with.
///
/// These never cross the resolver boundary as `Err`; the resolver converts
/// every failure into a `CheckResult` with `is_error` set plus a
/// classification handed to the error handler.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("unauthorized: no valid session")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("session expired")]
    SessionExpired,

    #[error("payment failed: {0}")]
    PaymentFailed(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}
