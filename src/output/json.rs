//! JSON output formatter for machine processing

use crate::domain::{Requirement, TechEntry};
use crate::output::{OutputFormatter, Verbosity};
use crate::readme::WriteOutcome;
use crate::updater::UpdateReport;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of an update report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Manifest path
    requirements: String,
    /// README path
    readme: String,
    /// What happened to the README
    outcome: WriteOutcome,
    /// Whether the README was written
    file_modified: bool,
    /// Packages parsed from the manifest
    packages: &'a [Requirement],
    /// Entries of the generated section
    entries: &'a [TechEntry],
    /// Rendered region (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    block: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: report.dry_run,
            requirements: report.requirements_path.display().to_string(),
            readme: report.write.path.display().to_string(),
            outcome: report.write.outcome,
            file_modified: report.write.file_modified,
            packages: &report.packages,
            entries: &report.section.entries,
            block: (self.verbosity == Verbosity::Verbose)
                .then_some(report.write.new_block.as_str()),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
