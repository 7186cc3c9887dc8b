//! Matcher Engine
//!
//! A matcher is a predicate object that judges whether an actual value
//! satisfies an expectation and, when it does not, produces a human-readable
//! mismatch description. Assertions inside test bodies go through
//! [`expect`], which converts a mismatch into a
//! [`HarnessError::Assertion`](crate::errors::HarnessError) that the body
//! propagates with `?`. The runner only needs to know "assertion raised vs.
//! not", so new matchers compose freely without touching execution logic.
//!
//! # Example
//!
//! ```
//! use pariksa::matchers::{expect, is_true, equals};
//!
//! assert!(expect(true, is_true()).is_ok());
//! assert!(expect(41 + 1, equals(42)).is_ok());
//! assert!(expect(false, is_true()).is_err());
//! ```

use std::fmt;

use crate::errors::HarnessError;

/// Capability contract for expectation predicates.
pub trait Matcher<T: ?Sized> {
    /// Does `actual` satisfy this expectation?
    fn matches(&self, actual: &T) -> bool;

    /// Human-readable description of why `actual` did not match.
    fn describe_mismatch(&self, actual: &T) -> String;
}

/// Evaluate `matcher` against `actual`.
///
/// Returns `Ok(())` on match. On mismatch, returns an assertion failure
/// carrying the matcher's mismatch description; propagating it with `?`
/// terminates the remaining body of the enclosing test case.
pub fn expect<T, M>(actual: T, matcher: M) -> Result<(), HarnessError>
where
    M: Matcher<T>,
{
    if matcher.matches(&actual) {
        Ok(())
    } else {
        Err(HarnessError::assertion(matcher.describe_mismatch(&actual)))
    }
}

// =============================================================================
// BUILT-IN MATCHERS
// =============================================================================

/// Matches iff the actual value is exactly `true`.
#[derive(Debug, Clone, Copy)]
pub struct IsTrue;

impl Matcher<bool> for IsTrue {
    fn matches(&self, actual: &bool) -> bool {
        *actual
    }

    fn describe_mismatch(&self, actual: &bool) -> String {
        format!("expected `true`, got `{}`", actual)
    }
}

/// Matcher that succeeds only for `true`.
pub fn is_true() -> IsTrue {
    IsTrue
}

/// Matches iff the actual value is exactly `false`.
#[derive(Debug, Clone, Copy)]
pub struct IsFalse;

impl Matcher<bool> for IsFalse {
    fn matches(&self, actual: &bool) -> bool {
        !*actual
    }

    fn describe_mismatch(&self, actual: &bool) -> String {
        format!("expected `false`, got `{}`", actual)
    }
}

/// Matcher that succeeds only for `false`.
pub fn is_false() -> IsFalse {
    IsFalse
}

/// Matches iff the actual value equals the expected one.
#[derive(Debug, Clone)]
pub struct Equals<T> {
    expected: T,
}

impl<T> Matcher<T> for Equals<T>
where
    T: PartialEq + fmt::Debug,
{
    fn matches(&self, actual: &T) -> bool {
        *actual == self.expected
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!("expected `{:?}`, got `{:?}`", self.expected, actual)
    }
}

/// Matcher that compares the actual value against `expected` with `==`.
pub fn equals<T>(expected: T) -> Equals<T> {
    Equals { expected }
}

/// Inverts an inner matcher.
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

impl<T, M> Matcher<T> for Not<M>
where
    M: Matcher<T>,
{
    fn matches(&self, actual: &T) -> bool {
        !self.inner.matches(actual)
    }

    fn describe_mismatch(&self, _actual: &T) -> String {
        "expected the value not to match, but it matched".to_string()
    }
}

/// Matcher that succeeds exactly when `inner` does not.
pub fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}
