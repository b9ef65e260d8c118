//! # turnstile-engine
//!
//! Entitlement resolution: reconciles the locally embedded subscription
//! snapshot (fast path) against the authoritative remote check (slow path)
//! into a single access decision, without flicker between access states and
//! without revoking access on transient failures.

pub mod gate;
pub mod resolver;
pub mod verifier;

pub use gate::ResourceKind;
pub use resolver::{plan_transition, EntitlementResolver, Transition};
pub use verifier::{DebouncedVerifier, VerifyOutcome};
