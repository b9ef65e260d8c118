//! Debounced wrapper around the remote authoritative check.
//!
//! Guarantees: at most one outstanding request per instance (single-flight),
//! and successive attempts inside the minimum interval are suppressed. Both
//! guards bound request rate during rapid input churn (focus/refresh storms).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use turnstile_core::errors::VerifyError;
use turnstile_core::traits::{RemoteCheck, SubscriptionAuthority};

/// Outcome of a verification attempt.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// The remote authority was contacted.
    Completed(Result<RemoteCheck, VerifyError>),
    /// A verification is already outstanding for this instance; the remote
    /// authority was not contacted.
    InFlight,
    /// The attempt fell inside the minimum interval and was not forced; the
    /// most recent known result stands with the caller.
    Suppressed,
}

/// Guard state for one resolver instance. Reset on construction, mutated
/// only by the verifier, never exposed.
#[derive(Debug)]
struct VerificationState {
    in_flight: bool,
    last_attempt_at: Option<Instant>,
}

/// Wraps the remote check with single-flight and minimum-interval guards.
pub struct DebouncedVerifier<A> {
    authority: Arc<A>,
    state: Mutex<VerificationState>,
    min_interval: Duration,
}

impl<A: SubscriptionAuthority> DebouncedVerifier<A> {
    pub fn new(authority: Arc<A>, min_interval: Duration) -> Self {
        Self {
            authority,
            state: Mutex::new(VerificationState {
                in_flight: false,
                last_attempt_at: None,
            }),
            min_interval,
        }
    }

    /// Attempt a verification for `user_id`.
    ///
    /// `force` bypasses the minimum-interval guard (manual refetch) but
    /// never the single-flight guard. The in-flight flag is cleared on
    /// completion even if this future is dropped mid-call.
    pub async fn verify(&self, user_id: &str, force: bool) -> VerifyOutcome {
        {
            let mut state = self.state.lock().unwrap();
            if state.in_flight {
                debug!(user_id, "verification already in flight; skipping");
                return VerifyOutcome::InFlight;
            }
            if !force {
                if let Some(at) = state.last_attempt_at {
                    if at.elapsed() < self.min_interval {
                        debug!(user_id, "verification attempt inside minimum interval; suppressed");
                        return VerifyOutcome::Suppressed;
                    }
                }
            }
            state.in_flight = true;
            state.last_attempt_at = Some(Instant::now());
        }

        let _guard = InFlightGuard(&self.state);
        let result = self.authority.check_subscription_access(user_id).await;
        VerifyOutcome::Completed(result)
    }
}

/// Clears the in-flight flag when the verification future completes or is
/// dropped before the remote call returns.
struct InFlightGuard<'a>(&'a Mutex<VerificationState>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.0.lock() {
            state.in_flight = false;
        }
    }
}
