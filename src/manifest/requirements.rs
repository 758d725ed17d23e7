//! requirements.txt parser
//!
//! Each non-empty, non-comment line has the shape `<name>[<op><version>]`.
//! The name is everything before the first operator character.

use crate::domain::Requirement;
use crate::error::ManifestError;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

/// Default manifest file name
pub const REQUIREMENTS_FILENAME: &str = "requirements.txt";

// First character of any PEP 440 comparison operator (==, >=, <=, >, <, !=, ~=, ===)
static OPERATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>=!~]").unwrap());

/// Parse package requirements from manifest content
pub fn parse_requirements(content: &str) -> Vec<Requirement> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Requirement> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (name, constraint) = match OPERATOR_RE.find(line) {
        Some(m) => (&line[..m.start()], line[m.start()..].trim()),
        None => (line, ""),
    };

    let name = name.trim();
    if name.is_empty() {
        tracing::debug!("skipping requirement line without a package name: {line}");
        return None;
    }

    let requirement = Requirement::new(name);
    if constraint.is_empty() {
        Some(requirement)
    } else {
        Some(requirement.with_constraint(constraint))
    }
}

/// Read and parse a manifest file
///
/// A missing file yields an empty list rather than an error.
pub fn read_requirements(path: &Path) -> Result<Vec<Requirement>, ManifestError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_requirements(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("manifest not found: {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(ManifestError::read_error(path, e)),
    }
}
