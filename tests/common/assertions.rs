//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for the diagnostic prefix on stderr
pub fn has_error() -> impl Predicate<str> {
    predicates::str::contains("error:")
}

/// Checks that the error message names the offending token
pub fn error_mentions(token: &str) -> impl Predicate<str> {
    has_error().and(predicates::str::contains(token.to_string()))
}

pub fn empty_output() -> impl Predicate<str> {
    predicates::str::is_empty()
}
