//! Pariksa Error Handling
//!
//! All failure modes of the harness are represented by a single
//! [`HarnessError`] enum, built on `thiserror` with `miette` diagnostics.
//!
//! The taxonomy is deliberately small:
//!
//! - **Registration**: a test was defined while no group was open. Fatal to
//!   the registration phase; surfaced immediately so a test never lands in an
//!   implicit default group.
//! - **Assertion**: produced by [`crate::matchers::expect`] on a matcher
//!   mismatch. Contained by the runner at the case boundary and converted
//!   into a `Failed` outcome.
//! - **Body**: any other error a test body reports (or a panic caught at the
//!   case boundary). Also becomes `Failed`, but its reason string preserves
//!   the original message rather than a mismatch description.
//! - **Setup**: the scheduler could not be constructed. The only error that
//!   aborts a run.

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for registration, assertion, and execution failures.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// `define_test` was called while no group was open.
    #[error("cannot register test {test_name:?}: no group is open")]
    #[diagnostic(
        code(pariksa::registration::no_open_group),
        help("call `open_group` first, or register through `define_group`")
    )]
    NoOpenGroup { test_name: String },

    /// An expectation inside a test body did not hold.
    #[error("expectation failed: {description}")]
    #[diagnostic(code(pariksa::assertion))]
    Assertion { description: String },

    /// A test body failed for a reason other than an expectation.
    #[error("{message}")]
    #[diagnostic(code(pariksa::body))]
    Body { message: String },

    /// The single-threaded scheduler could not be built.
    #[error("failed to start test scheduler: {0}")]
    #[diagnostic(code(pariksa::setup))]
    Setup(String),
}

impl HarnessError {
    /// Construct an assertion failure carrying a mismatch description.
    pub fn assertion(description: impl Into<String>) -> Self {
        HarnessError::Assertion {
            description: description.into(),
        }
    }

    /// Construct a body failure from an arbitrary error message.
    pub fn body(message: impl Into<String>) -> Self {
        HarnessError::Body {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_message_carries_description() {
        let err = HarnessError::assertion("expected `true`, got `false`");
        assert_eq!(
            err.to_string(),
            "expectation failed: expected `true`, got `false`"
        );
    }

    #[test]
    fn body_message_is_preserved_verbatim() {
        let err = HarnessError::body("collaborator exploded");
        assert_eq!(err.to_string(), "collaborator exploded");
    }

    #[test]
    fn registration_error_names_the_test() {
        let err = HarnessError::NoOpenGroup {
            test_name: "orphan".to_string(),
        };
        assert!(err.to_string().contains("orphan"));
        assert!(err.to_string().contains("no group is open"));
    }
}
