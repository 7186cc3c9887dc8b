//! Human-readable result reporting with colored terminal output.
//!
//! One line per case, a summary line, and a trailing list of failed test
//! names on stderr when anything failed. The exact byte format is not
//! load-bearing; the exit-relevant signal lives in
//! [`RunReport::exit_code`](crate::runner::RunReport::exit_code).

use crate::runner::{Outcome, RunReport};

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// Configuration for report rendering.
pub struct ReportConfig {
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

impl ReportConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Print per-case results and the run summary.
pub fn report_results(report: &RunReport, config: &ReportConfig) {
    for record in &report.records {
        match &record.outcome {
            Outcome::Passed => println!(
                "{}: {} [{}]",
                config.colorize("PASS", GREEN),
                record.name,
                record.group
            ),
            Outcome::Failed { reason } => {
                eprintln!(
                    "{}: {} [{}]",
                    config.colorize("FAIL", RED),
                    record.name,
                    record.group
                );
                eprintln!("  Reason: {}", reason);
            }
        }
    }

    println!(
        "\nTest summary: total {}, {} {}, {} {}",
        report.total(),
        config.colorize("passed", GREEN),
        report.passed(),
        config.colorize("failed", RED),
        report.failed(),
    );

    if report.failed() > 0 {
        eprintln!("\nFailed tests:");
        for record in &report.records {
            if !record.outcome.is_passed() {
                eprintln!("  - {} [{}]", record.name, record.group);
            }
        }
    }
}
