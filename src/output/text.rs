//! Text output formatter for human-readable display

use crate::output::{dry_run_prefix, OutputFormatter, Verbosity};
use crate::readme::WriteOutcome;
use crate::updater::UpdateReport;
use colored::{Color, Colorize};
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Enable or disable colors (builder pattern)
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn status_line(&self, report: &UpdateReport) -> String {
        let name = report
            .write
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.write.path.display().to_string());
        let prefix = dry_run_prefix(report.dry_run);

        let (line, color) = match report.write.outcome {
            WriteOutcome::ReadmeMissing => (format!("{} not found.", name), Color::Yellow),
            WriteOutcome::Unchanged => (
                format!("{} is already up to date.", name),
                Color::BrightBlack,
            ),
            WriteOutcome::Replaced | WriteOutcome::Appended if report.dry_run => (
                format!("{}{} would be updated.", prefix, name),
                Color::Cyan,
            ),
            WriteOutcome::Replaced | WriteOutcome::Appended => {
                (format!("{} updated successfully.", name), Color::Green)
            }
        };

        if self.color {
            line.color(color).to_string()
        } else {
            line
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "Manifest: {} ({} package(s))",
                report.requirements_path.display(),
                report.packages.len()
            )?;
            for package in &report.packages {
                writeln!(writer, "  {}", package)?;
            }
            writeln!(writer, "Section entries:")?;
            for entry in &report.section.entries {
                writeln!(writer, "  - {}", entry)?;
            }
            let placement = match report.write.outcome {
                WriteOutcome::Replaced => "replaced existing region",
                WriteOutcome::Appended => "appended at end of file",
                WriteOutcome::Unchanged => "no changes",
                WriteOutcome::ReadmeMissing => "skipped",
            };
            writeln!(writer, "README: {} ({})", report.write.path.display(), placement)?;
        }

        writeln!(writer, "{}", self.status_line(report))
    }
}
