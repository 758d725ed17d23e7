//! Technology entries shown in the README section

use serde::Serialize;
use std::fmt;

/// One bullet of the generated technology list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechEntry {
    /// Display name, rendered in bold
    pub name: String,
    /// Short description following the name
    pub description: String,
}

impl TechEntry {
    /// Creates a new entry
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Renders the entry as a Markdown list item
    pub fn to_markdown(&self) -> String {
        format!("- **{}**: {}", self.name, self.description)
    }
}

impl fmt::Display for TechEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Upper-cases the first character and lower-cases the rest
///
/// `SQLAlchemy` becomes `Sqlalchemy`, `fastapi` becomes `Fastapi`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
