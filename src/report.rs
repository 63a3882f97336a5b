//! Operator-facing output for a finished pass.

use crate::types::{FileReport, Status};

/// Per-status counts of a pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for r in reports {
            match r.status {
                Status::Ok => summary.ok += 1,
                Status::Skipped => summary.skipped += 1,
                Status::Warning => summary.warnings += 1,
                Status::Failed => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.ok + self.skipped + self.warnings + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

fn marker(status: Status) -> &'static str {
    match status {
        Status::Ok => "\u{2713}",
        Status::Skipped => "-",
        Status::Warning => "\u{26a0}",
        Status::Failed => "\u{2717}",
    }
}

/// Render one report line: `<file padded> <marker> <message>`.
pub fn format_report(report: &FileReport) -> String {
    format!("  {:<50} {} {}", report.file, marker(report.status), report.message)
}

/// Print every report followed by a totals line.
pub fn print_reports(reports: &[FileReport]) -> Summary {
    for report in reports {
        println!("{}", format_report(report));
    }

    let summary = Summary::from_reports(reports);
    println!(
        "\n{} file(s): {} ok, {} skipped, {} warning(s), {} failed",
        summary.total(),
        summary.ok,
        summary.skipped,
        summary.warnings,
        summary.failed
    );
    if !summary.has_failures() {
        println!("Done \u{2713}");
    }
    summary
}
