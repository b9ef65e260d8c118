//! Classification of failures into a closed kind set with fixed severities.
//! Pure lookup: no I/O here. Side effects belong to the handler.

use serde::{Deserialize, Serialize};

use super::verify_error::VerifyError;

/// Severity tiers, ordered. High and Critical are reported externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// All error kinds the portal surfaces.
///
/// The subscription and transport kinds are what the entitlement core
/// produces; the resource/user-scoped kinds are classified here too because
/// the content and admin collaborators share this taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessErrorKind {
    Unauthorized,
    Forbidden,
    SessionExpired,
    SubscriptionRequired,
    SubscriptionExpired,
    SubscriptionCancelled,
    PaymentFailed,
    NetworkError,
    ServerError,
    ValidationError,
    UnknownError,
    ResourceNotFound,
    ResourceConflict,
    UserNotFound,
    UserSuspended,
}

impl AccessErrorKind {
    /// All 15 kinds.
    pub const ALL: [AccessErrorKind; 15] = [
        Self::Unauthorized,
        Self::Forbidden,
        Self::SessionExpired,
        Self::SubscriptionRequired,
        Self::SubscriptionExpired,
        Self::SubscriptionCancelled,
        Self::PaymentFailed,
        Self::NetworkError,
        Self::ServerError,
        Self::ValidationError,
        Self::UnknownError,
        Self::ResourceNotFound,
        Self::ResourceConflict,
        Self::UserNotFound,
        Self::UserSuspended,
    ];

    /// Fixed severity for this kind.
    pub fn severity(&self) -> Severity {
        match self {
            Self::SessionExpired
            | Self::SubscriptionRequired
            | Self::SubscriptionExpired
            | Self::SubscriptionCancelled
            | Self::ValidationError
            | Self::ResourceNotFound
            | Self::UserNotFound => Severity::Low,

            Self::Unauthorized
            | Self::Forbidden
            | Self::NetworkError
            | Self::ResourceConflict => Severity::Medium,

            Self::PaymentFailed | Self::ServerError | Self::UserSuspended => Severity::High,

            Self::UnknownError => Severity::Critical,
        }
    }

    /// User-facing message template for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Please sign in to continue.",
            Self::Forbidden => "You don't have permission to do that.",
            Self::SessionExpired => "Your session has expired. Please sign in again.",
            Self::SubscriptionRequired => "A subscription is required to access this content.",
            Self::SubscriptionExpired => "Your subscription has expired. Renew to regain access.",
            Self::SubscriptionCancelled => "Your subscription was cancelled.",
            Self::PaymentFailed => "Your last payment failed. Please update your payment method.",
            Self::NetworkError => "Connection problem. Please check your network and try again.",
            Self::ServerError => "Something went wrong on our end. Please try again shortly.",
            Self::ValidationError => "Some of the submitted information is invalid.",
            Self::UnknownError => "An unexpected error occurred.",
            Self::ResourceNotFound => "The requested content could not be found.",
            Self::ResourceConflict => "This content was changed by someone else. Reload and retry.",
            Self::UserNotFound => "No account matches that user.",
            Self::UserSuspended => "This account has been suspended.",
        }
    }

    /// Whether this kind is forwarded to the external reporter.
    /// True only for High and Critical severities.
    pub fn should_report(&self) -> bool {
        self.severity() >= Severity::High
    }

    /// Whether the failure is recoverable locally: the previous access
    /// state is preserved and the user may retry. Transport failures only;
    /// authorization and validation failures are surfaced, not retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NetworkError | Self::ServerError)
    }

    /// Kind code as string (for wire payloads and logging).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::SubscriptionRequired => "SUBSCRIPTION_REQUIRED",
            Self::SubscriptionExpired => "SUBSCRIPTION_EXPIRED",
            Self::SubscriptionCancelled => "SUBSCRIPTION_CANCELLED",
            Self::PaymentFailed => "PAYMENT_FAILED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ResourceConflict => "RESOURCE_CONFLICT",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserSuspended => "USER_SUSPENDED",
        }
    }

    /// Parse a kind from its string code.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UNAUTHORIZED" => Some(Self::Unauthorized),
            "FORBIDDEN" => Some(Self::Forbidden),
            "SESSION_EXPIRED" => Some(Self::SessionExpired),
            "SUBSCRIPTION_REQUIRED" => Some(Self::SubscriptionRequired),
            "SUBSCRIPTION_EXPIRED" => Some(Self::SubscriptionExpired),
            "SUBSCRIPTION_CANCELLED" => Some(Self::SubscriptionCancelled),
            "PAYMENT_FAILED" => Some(Self::PaymentFailed),
            "NETWORK_ERROR" => Some(Self::NetworkError),
            "SERVER_ERROR" => Some(Self::ServerError),
            "VALIDATION_ERROR" => Some(Self::ValidationError),
            "UNKNOWN_ERROR" => Some(Self::UnknownError),
            "RESOURCE_NOT_FOUND" => Some(Self::ResourceNotFound),
            "RESOURCE_CONFLICT" => Some(Self::ResourceConflict),
            "USER_NOT_FOUND" => Some(Self::UserNotFound),
            "USER_SUSPENDED" => Some(Self::UserSuspended),
            _ => None,
        }
    }
}

/// A classified failure: kind, its fixed severity, the user-facing message
/// template, and the underlying detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedError {
    pub kind: AccessErrorKind,
    pub severity: Severity,
    pub message: String,
    pub detail: String,
}

/// Map an authority failure to its kind.
pub fn classify(err: &VerifyError) -> AccessErrorKind {
    match err {
        VerifyError::Network(_) => AccessErrorKind::NetworkError,
        VerifyError::Server { .. } => AccessErrorKind::ServerError,
        VerifyError::Unauthorized => AccessErrorKind::Unauthorized,
        VerifyError::Forbidden(_) => AccessErrorKind::Forbidden,
        VerifyError::SessionExpired => AccessErrorKind::SessionExpired,
        VerifyError::PaymentFailed(_) => AccessErrorKind::PaymentFailed,
        VerifyError::Validation(_) => AccessErrorKind::ValidationError,
        VerifyError::Unknown(_) => AccessErrorKind::UnknownError,
    }
}

/// Classify a failure and package it for the handler.
pub fn classify_error(err: &VerifyError) -> ClassifiedError {
    let kind = classify(err);
    ClassifiedError {
        kind,
        severity: kind.severity(),
        message: kind.message().to_string(),
        detail: err.to_string(),
    }
}
