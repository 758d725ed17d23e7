//! Technology section content
//!
//! The section always starts with a fixed preamble of the project's
//! front-end technologies, followed by one entry per manifest package.

use crate::domain::{capitalize, Requirement, TechEntry};
use serde::Serialize;

/// Heading written above the block when the section is appended
pub const SECTION_HEADING: &str = "## 🔧 核心技術";

/// Line opening the delimited region
pub const START_MARKER: &str = "<!-- TECH_START -->";

/// Line closing the delimited region
pub const END_MARKER: &str = "<!-- TECH_END -->";

/// Description used for packages missing from the lookup table
pub const FALLBACK_DESCRIPTION: &str = "專案依賴。";

const PREAMBLE: &[(&str, &str)] = &[
    ("Google Apps Script", "後端 API 與試算表資料儲存。"),
    ("Google Identity Services", "Google 帳號登入與身份驗證。"),
    ("Chart.js", "訓練數據與身體紀錄的圖表視覺化。"),
];

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("fastapi", "現代、高效的 Web 框架。"),
    ("uvicorn", "ASGI 伺服器。"),
    ("pandas", "資料處理。"),
    ("requests", "HTTP 請求。"),
    ("pydantic", "資料驗證。"),
    ("sqlalchemy", "資料庫 ORM。"),
];

/// The fixed entries that open every generated section
pub fn preamble() -> Vec<TechEntry> {
    PREAMBLE
        .iter()
        .map(|(name, description)| TechEntry::new(*name, *description))
        .collect()
}

/// Looks up the description for a package name, case-insensitively
pub fn describe(package: &str) -> &'static str {
    let key = package.to_lowercase();
    DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, description)| *description)
        .unwrap_or(FALLBACK_DESCRIPTION)
}

/// Generated list of technologies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechSection {
    /// Entries in render order
    pub entries: Vec<TechEntry>,
}

impl TechSection {
    /// Build the section from parsed manifest packages
    pub fn build(packages: &[Requirement]) -> Self {
        let mut entries = preamble();
        let preamble_len = entries.len();

        for package in packages {
            let lowered = package.name.to_lowercase();
            if entries[..preamble_len]
                .iter()
                .any(|e| e.name.to_lowercase() == lowered)
            {
                tracing::debug!("{} already listed in preamble", package.name);
                continue;
            }
            entries.push(TechEntry::new(
                capitalize(&package.name),
                describe(&package.name),
            ));
        }

        Self { entries }
    }

    /// Number of entries contributed by the manifest
    pub fn package_count(&self) -> usize {
        self.entries.len().saturating_sub(PREAMBLE.len())
    }

    /// Render the delimited block, markers included, without a trailing newline
    pub fn render_block(&self) -> String {
        let mut block = String::from(START_MARKER);
        block.push('\n');
        for entry in &self.entries {
            block.push_str(&entry.to_markdown());
            block.push('\n');
        }
        block.push_str(END_MARKER);
        block
    }

    /// Render the heading followed by the block
    pub fn render_section(&self) -> String {
        format!("{}\n{}", SECTION_HEADING, self.render_block())
    }
}
