//! Core domain models
//!
//! This module contains the fundamental types used by the README tooling:
//! - Requirement entries parsed from the dependency manifest
//! - Technology entries rendered into the README section

mod requirement;
mod tech_entry;

pub use requirement::Requirement;
pub use tech_entry::{capitalize, TechEntry};
