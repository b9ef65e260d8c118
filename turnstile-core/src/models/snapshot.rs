//! Raw subscription and principal records as supplied by the identity
//! collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw subscription data embedded in a principal fetch.
///
/// `status` is free text from the authority ("active", "past_due", ...);
/// normalization happens in [`crate::normalizer`]. The record is immutable
/// once read by the resolver: callers clone it out of the principal rather
/// than holding a reference into a record that may be refreshed upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnapshot {
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub plan_name: Option<String>,
}

/// The authenticated actor whose entitlement is being resolved.
///
/// Supplied by the identity/session collaborator, optionally with an
/// embedded [`SubscriptionSnapshot`]. Refresh cadence is outside this
/// crate's control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    pub role: Option<String>,
    pub subscription: Option<SubscriptionSnapshot>,
}

impl Principal {
    /// Whether the upstream identity record has finished populating.
    ///
    /// An incomplete principal (missing id or role) means the session is
    /// still loading; the resolver must not emit a new decision for it.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && self.role.is_some()
    }
}
