//! Pariksa: a minimal, embeddable asynchronous test harness.
//!
//! Test cases are registered into named groups and executed strictly in
//! registration order, one at a time, on a single-threaded scheduler. Bodies
//! are async and may suspend; assertions go through the matcher engine and a
//! failing one ends that case (and only that case) with a `Failed` outcome.
//!
//! ```no_run
//! use pariksa::{Harness, ReportConfig};
//! use pariksa::matchers::{expect, is_true};
//!
//! fn app_under_test() {}
//!
//! let mut harness = Harness::new();
//! harness.define_group("a group", |g| {
//!     g.define_test("sample test", || async {
//!         app_under_test();
//!         expect(true, is_true())
//!     });
//! });
//! let report = harness.run(&ReportConfig::default())?;
//! assert!(report.success());
//! # Ok::<(), pariksa::HarnessError>(())
//! ```

pub use crate::errors::HarnessError;
pub use crate::harness::{GroupContext, Harness};
pub use crate::reporter::ReportConfig;
pub use crate::runner::{CaseRecord, Outcome, RunReport};

pub mod errors;
pub mod harness;
pub mod matchers;
pub mod reporter;
pub mod runner;
