//! Status normalization: raw subscription snapshot to derived entitlement.
//! Pure, deterministic, no I/O. The canonical unit-test surface.

use chrono::{DateTime, Utc};

use crate::models::{DerivedEntitlement, NormalizedStatus, SubscriptionSnapshot};

/// Plan name that marks a free-tier principal. A free plan is not a paid
/// subscription: it is never entitled, regardless of reported status.
pub const FREE_PLAN: &str = "free";

const SECS_PER_DAY: i64 = 86_400;

/// Derive an entitlement from a snapshot and the current time.
///
/// Returns `None` when there is no snapshot. `is_active` holds exactly when
/// the plan is not free, the normalized status is entitling (active or
/// trialing), and the subscription has not expired.
pub fn derive(
    snapshot: Option<&SubscriptionSnapshot>,
    now: DateTime<Utc>,
) -> Option<DerivedEntitlement> {
    let snapshot = snapshot?;

    let status = NormalizedStatus::parse(&snapshot.status);
    let free_plan = snapshot
        .plan_name
        .as_deref()
        .is_some_and(|plan| plan.eq_ignore_ascii_case(FREE_PLAN));
    let is_expired = snapshot.expires_at.is_some_and(|expires| now > expires);
    let is_active = !free_plan && status.is_entitling() && !is_expired;
    let days_until_expiry = snapshot
        .expires_at
        .map(|expires| days_ceil((expires - now).num_seconds()))
        .unwrap_or(0);

    Some(DerivedEntitlement {
        is_active,
        is_expired,
        days_until_expiry,
        status,
        expires_at: snapshot.expires_at,
    })
}

/// Ceiling division of a second count into whole days.
/// Negative inputs stay negative (overdue counts are meaningful).
fn days_ceil(seconds: i64) -> i64 {
    if seconds >= 0 {
        (seconds + SECS_PER_DAY - 1) / SECS_PER_DAY
    } else {
        -(-seconds / SECS_PER_DAY)
    }
}
