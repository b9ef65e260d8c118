//! # turnstile-core
//!
//! Foundation crate for the Turnstile entitlement engine.
//! Defines the data models, the status normalizer, the error taxonomy and
//! classifier, configuration, and the remote authority trait.
//! The engine crate depends on this.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ResolverConfig;
pub use errors::{AccessErrorKind, ClassifiedError, ErrorHandler, ErrorReporter, Severity, VerifyError};
pub use models::{CheckResult, DerivedEntitlement, NormalizedStatus, Principal, SubscriptionSnapshot};
pub use traits::{RemoteCheck, SubscriptionAuthority};
