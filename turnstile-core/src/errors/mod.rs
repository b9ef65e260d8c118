//! Error taxonomy for entitlement resolution.
//!
//! `VerifyError` is what the remote authority can raise; the classifier maps
//! any failure into a closed set of kinds with fixed severities; the handler
//! is the injected side-effecting consumer (logging, conditional reporting).

pub mod classifier;
pub mod handler;
pub mod verify_error;

pub use classifier::{classify, classify_error, AccessErrorKind, ClassifiedError, Severity};
pub use handler::{ErrorHandler, ErrorReporter};
pub use verify_error::VerifyError;
