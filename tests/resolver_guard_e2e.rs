//! Resolver Guard E2E Tests
//!
//! Runs in its own test binary so the process-wide resolver slot is never
//! populated: every test here observes the uninstalled state. Operations
//! that need the installed resolver must fail fast with a "not installed"
//! panic, and operations that do not need it must keep working.

use apierr::{ApiError, ErrorKind, messages};
use std::io;

#[test]
fn e2e_nothing_is_installed_in_this_binary() {
    assert!(!messages::is_installed());
}

#[test]
#[should_panic(expected = "message resolver not installed")]
fn e2e_from_kind_fails_fast_without_a_resolver() {
    let _ = ApiError::from_kind(ErrorKind::TokenInvalid);
}

#[test]
#[should_panic(expected = "message resolver not installed")]
fn e2e_generic_fallback_fails_fast_without_a_resolver() {
    let _ = ApiError::new(8001).display_message();
}

#[test]
#[should_panic(expected = "message resolver not installed")]
fn e2e_kind_message_fails_fast_without_a_resolver() {
    let _ = ErrorKind::TooBusy.message();
}

#[test]
fn e2e_explicit_message_never_touches_the_resolver() {
    let error = ApiError::with_message(1001, "boom");
    assert_eq!(error.display_message(), "boom");
}

#[test]
fn e2e_cause_message_never_touches_the_resolver() {
    let error = ApiError::new(9002).caused_by(io::Error::other("deadline blown"));
    assert_eq!(error.display_message(), "deadline blown");
}

#[test]
fn e2e_explicit_resolver_injection_never_touches_the_slot() {
    let error = ApiError::from_kind_with(ErrorKind::NoAccount, &messages::EnglishMessages);
    assert_eq!(error.display_message(), ErrorKind::NoAccount.default_message());
    assert!(!messages::is_installed());
}
