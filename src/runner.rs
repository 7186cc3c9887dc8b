//! Test execution: a single-threaded scheduler that drives one case at a
//! time to its terminal outcome.
//!
//! Each case moves `Registered → Running → {Passed | Failed}`; terminal
//! states are final. The runner drives the case's future to completion on a
//! current-thread runtime, so a suspension point inside a body yields
//! cooperatively and the same case resumes; no other case starts before the
//! current one reaches a terminal state.
//!
//! All per-case failures are contained here: an assertion failure or body
//! error becomes `Failed(reason)`, and a panic raised inside a body is caught
//! at the case boundary. Nothing a body does can abort the remaining run.

use std::panic::{self, AssertUnwindSafe};

use crate::errors::HarnessError;
use crate::harness::Harness;

/// Terminal status of a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { reason: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// One recorded outcome, tagged with its group and test name.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub group: String,
    pub name: String,
    pub outcome: Outcome,
}

/// Aggregated results of a run, in registration order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<CaseRecord>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// True iff every case passed.
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    /// Process-exit-relevant summary: zero on success, one otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Execute every registered case in registration order.
///
/// Produces exactly one [`CaseRecord`] per registered case. The only error
/// returned from here is scheduler construction failure; everything a body
/// raises is contained in its record.
pub fn execute(harness: Harness) -> Result<RunReport, HarnessError> {
    let scheduler = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| HarnessError::Setup(e.to_string()))?;

    let mut report = RunReport::default();
    for group in harness.groups {
        for case in group.cases {
            let body = case.body;
            let verdict =
                panic::catch_unwind(AssertUnwindSafe(|| scheduler.block_on(body())));
            let outcome = match verdict {
                Ok(Ok(())) => Outcome::Passed,
                Ok(Err(failure)) => Outcome::Failed {
                    reason: failure.to_string(),
                },
                Err(payload) => Outcome::Failed {
                    reason: panic_message(payload.as_ref()),
                },
            };
            report.records.push(CaseRecord {
                group: group.name.clone(),
                name: case.name,
                outcome,
            });
        }
    }
    Ok(report)
}

/// Best-effort extraction of a panic payload's message.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("test body panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("test body panicked: {}", s)
    } else {
        "test body panicked".to_string()
    }
}
