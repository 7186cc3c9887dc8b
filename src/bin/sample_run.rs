// Pariksa demonstration runner: registers the canonical sample suite and
// exits non-zero iff any case failed.
// Usage: cargo run --bin sample_run [--fail]

use std::env;

use pariksa::matchers::{expect, is_true};
use pariksa::{Harness, ReportConfig};

// Stand-in for the application under test: a no-op collaborator.
fn maybe_print() {}

fn main() {
    let want_failure = env::args().skip(1).any(|a| a == "--fail");

    let mut harness = Harness::new();
    harness.define_group("a group", move |g| {
        g.define_test("sample test", move || async move {
            maybe_print();
            expect(!want_failure, is_true())
        });
    });

    match harness.run(&ReportConfig::default()) {
        Ok(report) => std::process::exit(report.exit_code()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}
