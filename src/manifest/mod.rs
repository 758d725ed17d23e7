//! Dependency manifest reading
//!
//! This module provides functionality to:
//! - Parse package names from a `requirements.txt` style manifest
//! - Read the manifest from disk, treating a missing file as empty

mod requirements;

pub use requirements::{parse_requirements, read_requirements, REQUIREMENTS_FILENAME};
