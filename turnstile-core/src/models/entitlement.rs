//! Normalized subscription status and the derived entitlement record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of normalized subscription states.
///
/// Anything the authority reports that does not match a known state maps to
/// `Inactive`. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedStatus {
    Active,
    Trialing,
    Cancelled,
    Expired,
    PastDue,
    Inactive,
}

impl NormalizedStatus {
    /// All six normalized states.
    pub const ALL: [NormalizedStatus; 6] = [
        Self::Active,
        Self::Trialing,
        Self::Cancelled,
        Self::Expired,
        Self::PastDue,
        Self::Inactive,
    ];

    /// Normalize a raw status string, case-insensitively.
    /// Both "cancelled" and "canceled" spellings are accepted.
    /// Unknown or empty input maps to `Inactive`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "trialing" => Self::Trialing,
            "cancelled" | "canceled" => Self::Cancelled,
            "expired" => Self::Expired,
            "past_due" => Self::PastDue,
            _ => Self::Inactive,
        }
    }

    /// Status name as string (for logging and UI).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
            Self::PastDue => "past_due",
            Self::Inactive => "inactive",
        }
    }

    /// States that grant paid access when not expired and not on a free plan.
    pub fn is_entitling(&self) -> bool {
        matches!(self, Self::Active | Self::Trialing)
    }
}

/// Entitlement derived from a [`crate::models::SubscriptionSnapshot`] and
/// the current time.
///
/// A pure function of its inputs: recomputed on every resolution, never
/// cached across time. `is_active` is never set independently of the
/// status/expiry/plan inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedEntitlement {
    pub is_active: bool,
    pub is_expired: bool,
    /// Ceiling of the time remaining until expiry, in days. Negative when
    /// already expired; 0 when the snapshot carries no expiry. Callers must
    /// not clamp: overdue values are meaningful for display.
    pub days_until_expiry: i64,
    pub status: NormalizedStatus,
    pub expires_at: Option<DateTime<Utc>>,
}
