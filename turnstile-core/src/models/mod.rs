//! Data models for entitlement resolution.
//!
//! `SubscriptionSnapshot` and `Principal` arrive from the identity/session
//! collaborator; `DerivedEntitlement` and `CheckResult` are produced here.

pub mod check_result;
pub mod entitlement;
pub mod snapshot;

pub use check_result::CheckResult;
pub use entitlement::{DerivedEntitlement, NormalizedStatus};
pub use snapshot::{Principal, SubscriptionSnapshot};
