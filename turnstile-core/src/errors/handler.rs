//! Side-effecting consumer of classified errors.
//!
//! Injected into the resolver as a constructor parameter so the decision
//! logic stays unit-testable without a process-wide reporting dependency.

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::classifier::{classify_error, ClassifiedError, Severity};
use super::verify_error::VerifyError;

/// External reporting sink for High/Critical classifications
/// (crash reporter, alerting, etc.).
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &ClassifiedError);
}

/// Classifies a failure, logs it at a level chosen by severity tier, and
/// forwards reportable kinds to the injected reporter.
#[derive(Clone, Default)]
pub struct ErrorHandler {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorHandler {
    /// Handler with no external reporter; logging only.
    pub fn new() -> Self {
        Self { reporter: None }
    }

    pub fn with_reporter(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            reporter: Some(reporter),
        }
    }

    /// Classify and surface a failure. Returns the classification so the
    /// caller can attach it to its result.
    pub fn handle(&self, err: &VerifyError) -> ClassifiedError {
        let classified = classify_error(err);

        match classified.severity {
            Severity::Low => debug!(
                kind = classified.kind.as_str(),
                detail = %classified.detail,
                "access check failed"
            ),
            Severity::Medium => warn!(
                kind = classified.kind.as_str(),
                detail = %classified.detail,
                "access check failed"
            ),
            Severity::High | Severity::Critical => error!(
                kind = classified.kind.as_str(),
                severity = classified.severity.as_str(),
                detail = %classified.detail,
                "access check failed"
            ),
        }

        if classified.kind.should_report() {
            if let Some(reporter) = &self.reporter {
                reporter.report(&classified);
            }
        }

        classified
    }
}
