//! The entitlement resolution state machine.
//!
//! Orchestrates the status normalizer (fast path) and the debounced
//! verifier (slow path) into a single `CheckResult`, published through a
//! watch channel so gate and banner consumers re-render on every update.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use turnstile_core::config::ResolverConfig;
use turnstile_core::errors::ErrorHandler;
use turnstile_core::models::{CheckResult, DerivedEntitlement, Principal};
use turnstile_core::normalizer;
use turnstile_core::traits::{RemoteCheck, SubscriptionAuthority};

use crate::verifier::{DebouncedVerifier, VerifyOutcome};

/// One step of the resolver's decision table. Pure function of the inputs,
/// so the no-op case is testable in isolation.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// No principal: deny outright.
    Deny,
    /// Principal still populating upstream: keep the last emitted result to
    /// avoid a visible flash of "no access" while the session loads.
    Retain,
    /// Embedded snapshot present: decide locally. The snapshot is trusted
    /// as current; remote verification is skipped entirely.
    Fast(DerivedEntitlement),
    /// No snapshot: provisional grant, then remote verification.
    Slow,
}

/// Plan the transition for a principal input at a given time.
pub fn plan_transition(principal: Option<&Principal>, now: DateTime<Utc>) -> Transition {
    let Some(principal) = principal else {
        return Transition::Deny;
    };
    if !principal.is_complete() {
        return Transition::Retain;
    }
    match normalizer::derive(principal.subscription.as_ref(), now) {
        Some(entitlement) => Transition::Fast(entitlement),
        None => Transition::Slow,
    }
}

/// Resolves access decisions for one principal stream.
///
/// Single logical thread of control per instance: the remote verification
/// may complete after the inputs have changed, so every completion is
/// checked against a generation counter and discarded when stale. Errors
/// never cross this boundary as `Err`; they become `CheckResult`s with
/// `is_error` set after classification by the injected handler.
pub struct EntitlementResolver<A: SubscriptionAuthority> {
    verifier: DebouncedVerifier<A>,
    handler: ErrorHandler,
    config: ResolverConfig,
    /// Bumped on every effective input (the loading no-op excluded) and on
    /// cancel. A slow-path completion whose captured generation no longer
    /// matches is stale and discarded.
    generation: AtomicU64,
    tx: watch::Sender<CheckResult>,
}

impl<A: SubscriptionAuthority> EntitlementResolver<A> {
    pub fn new(authority: Arc<A>, handler: ErrorHandler, config: ResolverConfig) -> Self {
        let verifier = DebouncedVerifier::new(authority, config.min_verify_interval());
        let (tx, _rx) = watch::channel(CheckResult::denied());
        Self {
            verifier,
            handler,
            config,
            generation: AtomicU64::new(0),
            tx,
        }
    }

    /// Feed the latest principal record and resolve an access decision.
    pub async fn resolve(&self, principal: Option<&Principal>) -> CheckResult {
        self.apply(principal, false).await
    }

    /// Manual refresh: bypasses the minimum-interval guard once, but still
    /// honors the single-flight guard.
    pub async fn refetch(&self, principal: Option<&Principal>) -> CheckResult {
        self.apply(principal, true).await
    }

    /// The last emitted decision.
    pub fn current(&self) -> CheckResult {
        self.tx.borrow().clone()
    }

    /// Subscribe to decision updates. Consumers must treat the optimistic
    /// interim result as provisional and re-render on change, never cache.
    pub fn subscribe(&self) -> watch::Receiver<CheckResult> {
        self.tx.subscribe()
    }

    /// Explicit dispose: any verification still in flight is discarded at
    /// its completion point and will not mutate resolver state.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    async fn apply(&self, principal: Option<&Principal>, force: bool) -> CheckResult {
        match plan_transition(principal, Utc::now()) {
            // A no-op by contract: a principal still loading neither emits
            // nor supersedes a verification already pending for it.
            Transition::Retain => self.current(),
            Transition::Deny => {
                self.next_generation();
                self.emit(CheckResult::denied())
            }
            Transition::Fast(entitlement) => {
                self.next_generation();
                debug!(
                    status = entitlement.status.as_str(),
                    active = entitlement.is_active,
                    "snapshot present; decided locally"
                );
                self.emit(CheckResult::from_entitlement(
                    entitlement,
                    &self.config.plans_route,
                ))
            }
            Transition::Slow => {
                let generation = self.next_generation();
                // Transition planning guarantees a complete principal here.
                let user_id = principal.map(|p| p.id.as_str()).unwrap_or_default();
                self.verify_slow_path(user_id, generation, force).await
            }
        }
    }

    /// Every effective input supersedes any verification still pending.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn verify_slow_path(&self, user_id: &str, generation: u64, force: bool) -> CheckResult {
        let prior = self.current();
        if self.config.optimistic_default {
            self.emit(CheckResult::optimistic());
        }

        let outcome = self.verifier.verify(user_id, force).await;

        // Staleness is checked at the point of completion, not invocation:
        // a newer input, an identity change, or cancel() invalidates this
        // verification and its result must not mutate state.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(user_id, "verification superseded; result discarded");
            return self.current();
        }

        match outcome {
            // The guard held the attempt back: the last known outcome stands,
            // not the interim emitted above.
            VerifyOutcome::InFlight | VerifyOutcome::Suppressed => self.emit(prior),
            VerifyOutcome::Completed(Ok(check)) => {
                let result = self.merge_remote(prior, check);
                self.emit(result)
            }
            VerifyOutcome::Completed(Err(err)) => {
                self.handler.handle(&err);
                // Preserve the pre-attempt state and surface the failure as
                // a classification, not as an access change. The interim
                // emitted above is provisional and never survives an error:
                // a failure must not upgrade a confirmed denial, nor drop a
                // confirmed subscription payload.
                let mut result = prior;
                result.is_error = true;
                self.emit(result)
            }
        }
    }

    /// Merge a remote verdict against the pre-attempt state. The interim
    /// emitted during this attempt is never the reference point.
    fn merge_remote(&self, prior: CheckResult, check: RemoteCheck) -> CheckResult {
        if check.missing {
            if prior.has_access {
                // A "no record found" response must not unilaterally revoke
                // access already granted by a prior positive signal.
                warn!("subscription record missing upstream; preserving previously granted access");
                return CheckResult {
                    is_missing: true,
                    is_error: false,
                    ..prior
                };
            }
            return CheckResult {
                has_access: false,
                subscription: None,
                redirect_to: Some(self.config.plans_route.clone()),
                is_error: false,
                is_missing: true,
            };
        }

        // A confident verdict replaces the prior result outright.
        let subscription = normalizer::derive(check.snapshot.as_ref(), Utc::now());
        CheckResult {
            has_access: check.has_access,
            subscription,
            redirect_to: (!check.has_access).then(|| self.config.plans_route.clone()),
            is_error: false,
            is_missing: false,
        }
    }

    fn emit(&self, result: CheckResult) -> CheckResult {
        self.tx.send_replace(result.clone());
        result
    }
}
