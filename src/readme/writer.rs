//! README rewriting
//!
//! This module provides:
//! - splice() for swapping the delimited region, or appending it when absent
//! - ReadmeWriter for applying a section to a file with dry-run support
//! - Skipping the write entirely when the content would not change

use crate::error::ReadmeError;
use crate::readme::section::{TechSection, END_MARKER, SECTION_HEADING, START_MARKER};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default README file name
pub const README_FILENAME: &str = "README.md";

/// How splice() placed the block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceKind {
    /// An existing delimited region was replaced
    Replaced,
    /// No region was found; the section was appended
    Appended,
}

/// Outcome of applying a section to a README file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The delimited region was replaced
    Replaced,
    /// The section was appended to the end of the file
    Appended,
    /// The file already contained the generated section
    Unchanged,
    /// The README did not exist; nothing was written
    ReadmeMissing,
}

/// Result of applying a section to a README file
#[derive(Debug, Clone, Serialize)]
pub struct WriteResult {
    /// Path to the README file
    pub path: PathBuf,
    /// What happened to the file
    pub outcome: WriteOutcome,
    /// Whether the file was actually modified
    pub file_modified: bool,
    /// Region text found before rewriting, markers included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_block: Option<String>,
    /// Newly rendered region text, markers included
    pub new_block: String,
}

impl WriteResult {
    fn new(path: impl Into<PathBuf>, outcome: WriteOutcome, new_block: String) -> Self {
        Self {
            path: path.into(),
            outcome,
            file_modified: false,
            previous_block: None,
            new_block,
        }
    }

    /// Returns true if the file differs (or would differ in dry-run) from before
    pub fn has_changes(&self) -> bool {
        matches!(
            self.outcome,
            WriteOutcome::Replaced | WriteOutcome::Appended
        )
    }
}

/// Byte range of the delimited region, markers included
///
/// Markers only count when they sit alone on their own line. An end marker
/// pairs with the nearest start marker above it, so a stray start marker
/// earlier in the file never swallows the text that follows it.
fn find_region(content: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    let mut start = None;

    for line in content.split_inclusive('\n') {
        let marker = line.trim_end();
        if marker == START_MARKER {
            start = Some(offset);
        } else if marker == END_MARKER {
            if let Some(start) = start {
                return Some((start, offset + END_MARKER.len()));
            }
        }
        offset += line.len();
    }

    None
}

/// Returns the current delimited region, markers included
pub fn current_block(content: &str) -> Option<&str> {
    find_region(content).map(|(start, end)| &content[start..end])
}

/// Place `block` into `content`
///
/// Replaces the first start-marker..end-marker region when present.
/// Markers must occupy whole lines.
/// Otherwise appends the heading and block after the existing content.
pub fn splice(content: &str, block: &str) -> (String, SpliceKind) {
    if let Some((start, end)) = find_region(content) {
        let mut out = String::with_capacity(content.len() - (end - start) + block.len());
        out.push_str(&content[..start]);
        out.push_str(block);
        out.push_str(&content[end..]);
        return (out, SpliceKind::Replaced);
    }

    let mut out = String::with_capacity(content.len() + block.len() + SECTION_HEADING.len() + 4);
    out.push_str(content);
    if !content.is_empty() {
        if !content.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(SECTION_HEADING);
    out.push('\n');
    out.push_str(block);
    out.push('\n');
    (out, SpliceKind::Appended)
}

/// Writer that applies a technology section to a README file
pub struct ReadmeWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

impl ReadmeWriter {
    /// Create a new ReadmeWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Create a ReadmeWriter in dry-run mode
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }

    /// Check if this writer is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Apply the section to the README at `path`
    pub fn apply(&self, path: &Path, section: &TechSection) -> Result<WriteResult, ReadmeError> {
        let block = section.render_block();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found", path.display());
                return Ok(WriteResult::new(path, WriteOutcome::ReadmeMissing, block));
            }
            Err(e) => return Err(ReadmeError::read_error(path, e)),
        };

        let previous_block = current_block(&content).map(str::to_string);
        let (updated, kind) = splice(&content, &block);

        let outcome = if updated == content {
            WriteOutcome::Unchanged
        } else {
            match kind {
                SpliceKind::Replaced => WriteOutcome::Replaced,
                SpliceKind::Appended => WriteOutcome::Appended,
            }
        };

        let mut result = WriteResult::new(path, outcome, block);
        result.previous_block = previous_block;

        if result.has_changes() && !self.dry_run {
            fs::write(path, &updated).map_err(|e| ReadmeError::write_error(path, e))?;
            result.file_modified = true;
            tracing::debug!("wrote {} ({:?})", path.display(), outcome);
        }

        Ok(result)
    }
}
