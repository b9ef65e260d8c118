//! The externally visible access decision.

use serde::{Deserialize, Serialize};

use super::entitlement::DerivedEntitlement;

/// The access decision consumed by gate and banner collaborators.
///
/// Constructed whole and replaced, never patched. An `is_error` result
/// never claims newly granted access that was not already held before the
/// error: error paths preserve or downgrade, they do not upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub has_access: bool,
    pub subscription: Option<DerivedEntitlement>,
    /// Navigation target for the billing/checkout collaborator when access
    /// is denied.
    pub redirect_to: Option<String>,
    pub is_error: bool,
    /// True when the authority reported no subscription record at all.
    pub is_missing: bool,
}

impl CheckResult {
    /// Access denied outright (unauthenticated principal).
    pub fn denied() -> Self {
        Self {
            has_access: false,
            subscription: None,
            redirect_to: None,
            is_error: false,
            is_missing: false,
        }
    }

    /// Provisional grant while the slow path is still verifying.
    /// Consumers must treat this as provisional and re-render on update.
    pub fn optimistic() -> Self {
        Self {
            has_access: true,
            subscription: None,
            redirect_to: None,
            is_error: false,
            is_missing: false,
        }
    }

    /// Decision derived from a locally normalized entitlement (fast path).
    /// Inactive entitlements carry the plans route as the redirect target.
    pub fn from_entitlement(entitlement: DerivedEntitlement, plans_route: &str) -> Self {
        let has_access = entitlement.is_active;
        Self {
            has_access,
            redirect_to: (!has_access).then(|| plans_route.to_string()),
            subscription: Some(entitlement),
            is_error: false,
            is_missing: false,
        }
    }
}
