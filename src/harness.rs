//! Test registration: groups, cases, and the two registration surfaces.
//!
//! A [`Harness`] owns an ordered list of [`TestGroup`]s; each group owns an
//! ordered list of [`TestCase`]s. Order is load-bearing: execution order
//! equals registration order, across groups.
//!
//! Registration has two surfaces:
//!
//! - **Structural** ([`Harness::define_group`]): the group body receives an
//!   explicit [`GroupContext`], so a test can only be defined while its group
//!   is demonstrably open. Out-of-context registration is unrepresentable.
//! - **Imperative** ([`Harness::open_group`] / [`Harness::define_test`] /
//!   [`Harness::close_group`]): for callers that build suites dynamically.
//!   Defining a test with no open group is a registration error, surfaced
//!   immediately rather than routed to a default group.
//!
//! A test body is lazy: registration stores a thunk that produces the body's
//! future; the runner calls it exactly once, at execution time.

use std::future::Future;
use std::pin::Pin;

use crate::errors::HarnessError;
use crate::reporter::{self, ReportConfig};
use crate::runner::{self, RunReport};

/// The driven form of a test body: a future resolving to pass (`Ok`) or a
/// contained failure (`Err`).
pub type CaseFuture = Pin<Box<dyn Future<Output = Result<(), HarnessError>>>>;

/// Deferred test body. Invoked exactly once, at run time.
pub type CaseBody = Box<dyn FnOnce() -> CaseFuture>;

/// A single named, independently-outcome-tracked execution unit.
pub struct TestCase {
    pub name: String,
    pub(crate) body: CaseBody,
}

impl TestCase {
    fn new<F, Fut>(name: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<(), HarnessError>> + 'static,
    {
        TestCase {
            name: name.into(),
            body: Box::new(move || Box::pin(body())),
        }
    }
}

/// A named collection of test cases, executed in registration order.
pub struct TestGroup {
    pub name: String,
    pub(crate) cases: Vec<TestCase>,
}

impl TestGroup {
    fn new(name: impl Into<String>) -> Self {
        TestGroup {
            name: name.into(),
            cases: Vec::new(),
        }
    }
}

/// Registration scope handed to a `define_group` body.
///
/// Holding a `GroupContext` is proof that a group is open; its
/// [`define_test`](GroupContext::define_test) therefore cannot fail.
pub struct GroupContext<'g> {
    group: &'g mut TestGroup,
}

impl GroupContext<'_> {
    /// Append a test case to the open group. The body runs at execution
    /// time, not now.
    pub fn define_test<F, Fut>(&mut self, name: impl Into<String>, body: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<(), HarnessError>> + 'static,
    {
        self.group.cases.push(TestCase::new(name, body));
    }
}

/// Registry of test groups plus the entry point for running them.
#[derive(Default)]
pub struct Harness {
    pub(crate) groups: Vec<TestGroup>,
    /// Index of the group opened by `open_group`, if one is open.
    open: Option<usize>,
}

impl Harness {
    pub fn new() -> Self {
        Harness::default()
    }

    /// Register a fresh group. `register` runs synchronously, now; inside it,
    /// [`GroupContext::define_test`] appends cases. Each call creates a
    /// distinct group record even when names repeat. Closes any group left
    /// open by [`open_group`](Harness::open_group), so a later `define_test`
    /// cannot land in this group.
    pub fn define_group<R>(&mut self, name: impl Into<String>, register: R)
    where
        R: FnOnce(&mut GroupContext),
    {
        let mut group = TestGroup::new(name);
        register(&mut GroupContext { group: &mut group });
        self.groups.push(group);
        self.open = None;
    }

    /// Open a fresh group for imperative registration.
    pub fn open_group(&mut self, name: impl Into<String>) {
        self.groups.push(TestGroup::new(name));
        self.open = Some(self.groups.len() - 1);
    }

    /// Close the currently open group, if any.
    pub fn close_group(&mut self) {
        self.open = None;
    }

    /// Append a test case to the currently open group.
    ///
    /// Fails with a registration error when no group is open; the case is
    /// never silently routed anywhere else.
    pub fn define_test<F, Fut>(
        &mut self,
        name: impl Into<String>,
        body: F,
    ) -> Result<(), HarnessError>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<(), HarnessError>> + 'static,
    {
        let name = name.into();
        let Some(idx) = self.open else {
            return Err(HarnessError::NoOpenGroup { test_name: name });
        };
        let Some(group) = self.groups.get_mut(idx) else {
            return Err(HarnessError::NoOpenGroup { test_name: name });
        };
        group.cases.push(TestCase::new(name, body));
        Ok(())
    }

    /// Total number of registered cases across all groups.
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.cases.len()).sum()
    }

    /// Execute every registered case in registration order, without
    /// rendering a report. Consumes the harness: each case runs exactly once.
    pub fn execute(self) -> Result<RunReport, HarnessError> {
        runner::execute(self)
    }

    /// Execute every registered case and print a human-readable report.
    pub fn run(self, config: &ReportConfig) -> Result<RunReport, HarnessError> {
        let report = runner::execute(self)?;
        reporter::report_results(&report, config);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_group_creates_distinct_records_for_duplicate_names() {
        let mut harness = Harness::new();
        harness.define_group("dup", |g| {
            g.define_test("one", || async { Ok(()) });
        });
        harness.define_group("dup", |g| {
            g.define_test("two", || async { Ok(()) });
        });
        assert_eq!(harness.groups.len(), 2);
        assert_eq!(harness.case_count(), 2);
    }

    #[test]
    fn define_test_without_open_group_is_a_registration_error() {
        let mut harness = Harness::new();
        let err = harness
            .define_test("orphan", || async { Ok(()) })
            .unwrap_err();
        assert!(matches!(err, HarnessError::NoOpenGroup { ref test_name } if test_name == "orphan"));
        assert_eq!(harness.case_count(), 0);
    }

    #[test]
    fn define_test_after_close_group_is_rejected() {
        let mut harness = Harness::new();
        harness.open_group("g");
        harness
            .define_test("inside", || async { Ok(()) })
            .expect("group is open");
        harness.close_group();
        assert!(harness.define_test("outside", || async { Ok(()) }).is_err());
        assert_eq!(harness.case_count(), 1);
    }

    #[test]
    fn define_group_closes_an_imperatively_opened_group() {
        let mut harness = Harness::new();
        harness.open_group("imperative group");
        harness.close_group();
        harness.define_group("structural group", |g| {
            g.define_test("structural case", || async { Ok(()) });
        });

        // No group is open any more, so this must be rejected rather than
        // appended to the structural group.
        let err = harness
            .define_test("stray case", || async { Ok(()) })
            .unwrap_err();
        assert!(matches!(err, HarnessError::NoOpenGroup { ref test_name } if test_name == "stray case"));
        assert_eq!(harness.groups[1].cases.len(), 1);
        assert_eq!(harness.case_count(), 1);
    }

    #[test]
    fn define_test_targets_the_opened_group_not_the_newest_one() {
        let mut harness = Harness::new();
        harness.open_group("imperative group");
        harness.define_group("structural group", |g| {
            g.define_test("structural case", || async { Ok(()) });
        });

        // The structural registration closed the imperative group too.
        assert!(harness.define_test("late case", || async { Ok(()) }).is_err());

        let placement: Vec<(&str, usize)> = harness
            .groups
            .iter()
            .map(|g| (g.name.as_str(), g.cases.len()))
            .collect();
        assert_eq!(
            placement,
            vec![("imperative group", 0), ("structural group", 1)]
        );
    }

    #[test]
    fn registration_preserves_order() {
        let mut harness = Harness::new();
        harness.define_group("g", |g| {
            g.define_test("first", || async { Ok(()) });
            g.define_test("second", || async { Ok(()) });
        });
        let names: Vec<_> = harness.groups[0]
            .cases
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
