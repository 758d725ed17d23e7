//! Diff output formatter for showing the rewritten region

use crate::output::{dry_run_prefix, OutputFormatter};
use crate::readme::{WriteOutcome, SECTION_HEADING};
use crate::updater::UpdateReport;
use std::io::Write;

/// Diff formatter for showing region changes
pub struct DiffFormatter;

impl OutputFormatter for DiffFormatter {
    fn format(&self, report: &UpdateReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = dry_run_prefix(report.dry_run);
        let path = report.write.path.display();

        match report.write.outcome {
            WriteOutcome::ReadmeMissing => {
                return writeln!(writer, "{}# {} not found", prefix, path);
            }
            WriteOutcome::Unchanged => {
                return writeln!(writer, "{}# {} is up to date", prefix, path);
            }
            WriteOutcome::Replaced | WriteOutcome::Appended => {}
        }

        writeln!(writer, "{}--- a/{}", prefix, path)?;
        writeln!(writer, "{}+++ b/{}", prefix, path)?;
        writeln!(writer, "@@ {} @@", SECTION_HEADING)?;

        if let Some(previous) = &report.write.previous_block {
            for line in previous.lines() {
                writeln!(writer, "-{}", line)?;
            }
        }
        if report.write.outcome == WriteOutcome::Appended {
            writeln!(writer, "+{}", SECTION_HEADING)?;
        }
        for line in report.write.new_block.lines() {
            writeln!(writer, "+{}", line)?;
        }

        Ok(())
    }
}
