//! README update workflow
//!
//! This module coordinates: read manifest → build section → rewrite README.
//! A missing manifest or README is reported, not treated as an error.

use crate::cli::ReadmeArgs;
use crate::domain::Requirement;
use crate::error::AppError;
use crate::manifest::read_requirements;
use crate::readme::{ReadmeWriter, TechSection, WriteResult};
use std::path::PathBuf;

/// Resolved inputs for one update run
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Dependency manifest path
    pub requirements_path: PathBuf,
    /// README path
    pub readme_path: PathBuf,
    /// Whether to skip writing
    pub dry_run: bool,
}

impl From<&ReadmeArgs> for UpdateOptions {
    fn from(args: &ReadmeArgs) -> Self {
        Self {
            requirements_path: args.requirements_path(),
            readme_path: args.readme_path(),
            dry_run: args.dry_run,
        }
    }
}

/// Everything the formatters need to report a run
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// Manifest path that was read
    pub requirements_path: PathBuf,
    /// Packages parsed from the manifest, in file order
    pub packages: Vec<Requirement>,
    /// The generated section
    pub section: TechSection,
    /// What happened to the README
    pub write: WriteResult,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

/// Runs the README update workflow
pub struct ReadmeUpdater {
    options: UpdateOptions,
}

impl ReadmeUpdater {
    /// Create an updater for the given options
    pub fn new(options: UpdateOptions) -> Self {
        Self { options }
    }

    /// Read the manifest, build the section and apply it to the README
    pub fn run(&self) -> Result<UpdateReport, AppError> {
        let opts = &self.options;

        let packages = read_requirements(&opts.requirements_path)?;
        tracing::debug!(
            "parsed {} package(s) from {}",
            packages.len(),
            opts.requirements_path.display()
        );

        let section = TechSection::build(&packages);
        let write = ReadmeWriter::new(opts.dry_run).apply(&opts.readme_path, &section)?;

        Ok(UpdateReport {
            requirements_path: opts.requirements_path.clone(),
            packages,
            section,
            write,
            dry_run: opts.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readme::{preamble, WriteOutcome, README_FILENAME};
    use std::fs;
    use tempfile::TempDir;

    fn options(dir: &TempDir, dry_run: bool) -> UpdateOptions {
        UpdateOptions {
            requirements_path: dir.path().join("requirements.txt"),
            readme_path: dir.path().join(README_FILENAME),
            dry_run,
        }
    }

    #[test]
    fn test_run_with_manifest_and_readme() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("requirements.txt"),
            "fastapi==0.1\n# comment\n\npandas>=1.0\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join(README_FILENAME), "# Fitness\n").unwrap();

        let report = ReadmeUpdater::new(options(&temp_dir, false)).run().unwrap();

        let names: Vec<_> = report.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fastapi", "pandas"]);
        assert_eq!(report.section.package_count(), 2);
        assert_eq!(report.write.outcome, WriteOutcome::Appended);
        assert!(report.write.file_modified);
    }

    #[test]
    fn test_run_without_manifest_uses_preamble_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(README_FILENAME), "# Fitness\n").unwrap();

        let report = ReadmeUpdater::new(options(&temp_dir, false)).run().unwrap();

        assert!(report.packages.is_empty());
        assert_eq!(report.section.entries, preamble());
    }

    #[test]
    fn test_run_without_readme_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("requirements.txt"), "fastapi\n").unwrap();

        let report = ReadmeUpdater::new(options(&temp_dir, false)).run().unwrap();

        assert_eq!(report.write.outcome, WriteOutcome::ReadmeMissing);
        assert!(!temp_dir.path().join(README_FILENAME).exists());
    }

    #[test]
    fn test_options_from_args() {
        use clap::Parser;
        let args = ReadmeArgs::parse_from(["update-readme-info", "/proj", "-n"]);
        let opts = UpdateOptions::from(&args);
        assert_eq!(opts.requirements_path, PathBuf::from("/proj/requirements.txt"));
        assert_eq!(opts.readme_path, PathBuf::from("/proj/README.md"));
        assert!(opts.dry_run);
    }
}
