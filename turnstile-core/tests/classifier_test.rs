//! Tests for the error taxonomy, classification, and the injected handler.

use std::sync::{Arc, Mutex};

use turnstile_core::errors::{
    classify, classify_error, AccessErrorKind, ClassifiedError, ErrorHandler, ErrorReporter,
    Severity, VerifyError,
};

// ============================================================
// Classification: VerifyError -> kind
// ============================================================

#[test]
fn transport_failures_classify_to_transport_kinds() {
    assert_eq!(
        classify(&VerifyError::Network("connection refused".into())),
        AccessErrorKind::NetworkError
    );
    assert_eq!(
        classify(&VerifyError::Server {
            status: 503,
            message: "unavailable".into()
        }),
        AccessErrorKind::ServerError
    );
}

#[test]
fn authorization_failures_classify_to_auth_kinds() {
    assert_eq!(classify(&VerifyError::Unauthorized), AccessErrorKind::Unauthorized);
    assert_eq!(
        classify(&VerifyError::Forbidden("admin only".into())),
        AccessErrorKind::Forbidden
    );
    assert_eq!(classify(&VerifyError::SessionExpired), AccessErrorKind::SessionExpired);
}

#[test]
fn domain_failures_classify_to_domain_kinds() {
    assert_eq!(
        classify(&VerifyError::PaymentFailed("card declined".into())),
        AccessErrorKind::PaymentFailed
    );
    assert_eq!(
        classify(&VerifyError::Validation("bad input".into())),
        AccessErrorKind::ValidationError
    );
    assert_eq!(
        classify(&VerifyError::Unknown("???".into())),
        AccessErrorKind::UnknownError
    );
}

#[test]
fn classified_error_carries_kind_severity_message_and_detail() {
    let err = VerifyError::Server {
        status: 500,
        message: "boom".into(),
    };
    let classified = classify_error(&err);
    assert_eq!(classified.kind, AccessErrorKind::ServerError);
    assert_eq!(classified.severity, Severity::High);
    assert!(!classified.message.is_empty());
    assert!(classified.detail.contains("500"));
}

// ============================================================
// Severity table
// ============================================================

#[test]
fn severity_tiers_are_ordered() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
}

#[test]
fn expected_business_states_are_low_severity() {
    for kind in [
        AccessErrorKind::SessionExpired,
        AccessErrorKind::SubscriptionRequired,
        AccessErrorKind::SubscriptionExpired,
        AccessErrorKind::SubscriptionCancelled,
        AccessErrorKind::ValidationError,
    ] {
        assert_eq!(kind.severity(), Severity::Low, "{:?}", kind);
    }
}

#[test]
fn unknown_errors_are_critical_and_always_reported() {
    assert_eq!(AccessErrorKind::UnknownError.severity(), Severity::Critical);
    assert!(AccessErrorKind::UnknownError.should_report());
}

#[test]
fn should_report_only_for_high_and_critical() {
    for kind in &AccessErrorKind::ALL {
        assert_eq!(
            kind.should_report(),
            kind.severity() >= Severity::High,
            "{:?}",
            kind
        );
    }
}

#[test]
fn only_transport_failures_are_recoverable() {
    for kind in &AccessErrorKind::ALL {
        let expected = matches!(
            kind,
            AccessErrorKind::NetworkError | AccessErrorKind::ServerError
        );
        assert_eq!(kind.is_recoverable(), expected, "{:?}", kind);
    }
}

// ============================================================
// Kind codes
// ============================================================

#[test]
fn kind_str_roundtrip() {
    for kind in &AccessErrorKind::ALL {
        assert_eq!(AccessErrorKind::parse(kind.as_str()), Some(*kind));
    }
    assert_eq!(AccessErrorKind::parse("NOT_A_KIND"), None);
}

#[test]
fn all_kinds_have_nonempty_messages() {
    for kind in &AccessErrorKind::ALL {
        assert!(!kind.message().is_empty(), "{:?}", kind);
    }
}

#[test]
fn subscription_kinds_exist_for_the_wider_portal() {
    // These kinds are produced by the billing and content collaborators,
    // not by classification of VerifyError, but share the taxonomy.
    for code in [
        "SUBSCRIPTION_REQUIRED",
        "SUBSCRIPTION_EXPIRED",
        "SUBSCRIPTION_CANCELLED",
        "RESOURCE_NOT_FOUND",
        "USER_SUSPENDED",
    ] {
        assert!(AccessErrorKind::parse(code).is_some(), "{code}");
    }
}

// ============================================================
// Handler: logging + conditional reporting
// ============================================================

#[derive(Default)]
struct RecordingReporter {
    reported: Mutex<Vec<ClassifiedError>>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &ClassifiedError) {
        self.reported.lock().unwrap().push(error.clone());
    }
}

#[test]
fn handler_reports_high_and_critical_only() {
    let reporter = Arc::new(RecordingReporter::default());
    let handler = ErrorHandler::with_reporter(reporter.clone());

    handler.handle(&VerifyError::Network("flaky wifi".into())); // medium
    handler.handle(&VerifyError::SessionExpired); // low
    handler.handle(&VerifyError::Server {
        status: 500,
        message: "boom".into(),
    }); // high
    handler.handle(&VerifyError::Unknown("corrupt state".into())); // critical

    let reported = reporter.reported.lock().unwrap();
    assert_eq!(reported.len(), 2);
    assert_eq!(reported[0].kind, AccessErrorKind::ServerError);
    assert_eq!(reported[1].kind, AccessErrorKind::UnknownError);
}

#[test]
fn handler_without_reporter_still_classifies() {
    let handler = ErrorHandler::new();
    let classified = handler.handle(&VerifyError::Unauthorized);
    assert_eq!(classified.kind, AccessErrorKind::Unauthorized);
    assert_eq!(classified.severity, Severity::Medium);
}

#[test]
fn handler_returns_the_classification_to_the_caller() {
    let handler = ErrorHandler::new();
    let classified = handler.handle(&VerifyError::PaymentFailed("card declined".into()));
    assert_eq!(classified.kind, AccessErrorKind::PaymentFailed);
    assert!(classified.detail.contains("card declined"));
}
