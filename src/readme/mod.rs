//! README technology section generation and rewriting
//!
//! This module provides:
//! - TechSection for building the technology list from parsed requirements
//! - splice() for replacing the marker-delimited region of a document
//! - ReadmeWriter for applying the section to a README file on disk

mod section;
mod writer;

pub use section::{
    describe, preamble, TechSection, END_MARKER, FALLBACK_DESCRIPTION, SECTION_HEADING,
    START_MARKER,
};
pub use writer::{
    current_block, splice, ReadmeWriter, SpliceKind, WriteOutcome, WriteResult, README_FILENAME,
};
