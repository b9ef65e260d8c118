//! The authoritative remote subscription check.

use serde::{Deserialize, Serialize};

use crate::errors::VerifyError;
use crate::models::SubscriptionSnapshot;

/// Outcome of the authoritative remote check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCheck {
    pub has_access: bool,
    pub snapshot: Option<SubscriptionSnapshot>,
    /// True when the authority holds no subscription record for the
    /// principal at all. Distinct from a confident denial: a missing record
    /// may be an empty lookup racing slower-settling writes.
    pub missing: bool,
}

impl RemoteCheck {
    /// A confident grant or denial backed by a record.
    pub fn resolved(has_access: bool, snapshot: Option<SubscriptionSnapshot>) -> Self {
        Self {
            has_access,
            snapshot,
            missing: false,
        }
    }

    /// The "no record found" response.
    pub fn no_record() -> Self {
        Self {
            has_access: false,
            snapshot: None,
            missing: true,
        }
    }
}

/// The backend-as-a-service query deciding whether a principal currently
/// holds paid access. Opaque to this crate: it may fail with transport or
/// authorization errors, or report that no record exists.
#[allow(async_fn_in_trait)]
pub trait SubscriptionAuthority: Send + Sync {
    async fn check_subscription_access(&self, user_id: &str) -> Result<RemoteCheck, VerifyError>;
}
