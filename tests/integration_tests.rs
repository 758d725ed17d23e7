//! Integration tests for fitness-webapp
//!
//! These tests verify:
//! - Manifest parsing from disk
//! - README region replacement and append behaviour
//! - Idempotent regeneration

use fitness_webapp::manifest::read_requirements;
use fitness_webapp::readme::{ReadmeWriter, TechSection, WriteOutcome, END_MARKER, START_MARKER};
use fitness_webapp::updater::{ReadmeUpdater, UpdateOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn options(dir: &TempDir) -> UpdateOptions {
    UpdateOptions {
        requirements_path: dir.path().join("requirements.txt"),
        readme_path: dir.path().join("README.md"),
        dry_run: false,
    }
}

mod manifest_parsing {
    use super::*;

    /// Comments, blank lines and version operators are stripped
    #[test]
    fn test_parse_requirements_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("requirements.txt");
        fs::write(&path, "fastapi==0.1\n# comment\n\npandas>=1.0\n").unwrap();

        let names: Vec<String> = read_requirements(&path)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["fastapi", "pandas"]);
    }

    /// A missing manifest is an empty list, not an error
    #[test]
    fn test_missing_requirements_file() {
        let reqs = read_requirements(&PathBuf::from("/nonexistent/requirements.txt")).unwrap();
        assert!(reqs.is_empty());
    }
}

mod readme_rewriting {
    use super::*;

    /// Only the bounded region changes; surrounding text is byte-identical
    #[test]
    fn test_replace_preserves_surrounding_text() {
        let temp_dir = create_test_dir();
        let before = "# Fitness WebApp\r\n\r\nIntro with trailing spaces   \n\n## 🔧 核心技術\n";
        let after = "\n\n## 🚀 部署\n\nDeploy notes.\n";
        let readme = format!(
            "{}{}\nanything at all\n- **Stale**: entry\n{}{}",
            before, START_MARKER, END_MARKER, after
        );
        let path = temp_dir.path().join("README.md");
        fs::write(&path, &readme).unwrap();

        let section = TechSection::build(&[]);
        let result = ReadmeWriter::new(false).apply(&path, &section).unwrap();
        assert_eq!(result.outcome, WriteOutcome::Replaced);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            format!("{}{}{}", before, section.render_block(), after)
        );
    }

    /// Without markers the section is appended and existing content untouched
    #[test]
    fn test_append_when_no_markers() {
        let temp_dir = create_test_dir();
        let original = "# Fitness WebApp\n\nNo tech section yet.";
        fs::write(temp_dir.path().join("README.md"), original).unwrap();
        fs::write(temp_dir.path().join("requirements.txt"), "uvicorn\n").unwrap();

        let report = ReadmeUpdater::new(options(&temp_dir)).run().unwrap();
        assert_eq!(report.write.outcome, WriteOutcome::Appended);

        let written = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
        assert!(written.starts_with(original));
        assert!(written.contains("- **Uvicorn**: ASGI 伺服器。\n"));
        assert!(written.ends_with("<!-- TECH_END -->\n"));
    }

    /// Missing manifest produces a preamble-only section
    #[test]
    fn test_missing_manifest_yields_preamble_only() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("README.md"), "# App\n").unwrap();

        ReadmeUpdater::new(options(&temp_dir)).run().unwrap();

        let written = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
        let bullets: Vec<&str> = written.lines().filter(|l| l.starts_with("- **")).collect();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].starts_with("- **Google Apps Script**"));
        assert!(bullets[2].starts_with("- **Chart.js**"));
    }

    /// Running twice yields the same file
    #[test]
    fn test_regeneration_is_idempotent() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("README.md"), "# App\n").unwrap();
        fs::write(
            temp_dir.path().join("requirements.txt"),
            "fastapi==0.110\nsqlalchemy>=2\nrequests\n",
        )
        .unwrap();

        let updater = ReadmeUpdater::new(options(&temp_dir));
        updater.run().unwrap();
        let first = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();

        let report = updater.run().unwrap();
        let second = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();

        assert_eq!(first, second);
        assert_eq!(report.write.outcome, WriteOutcome::Unchanged);
    }

    /// Manifest changes are reflected on the next run
    #[test]
    fn test_regeneration_tracks_manifest_changes() {
        let temp_dir = create_test_dir();
        let readme = temp_dir.path().join("README.md");
        let manifest = temp_dir.path().join("requirements.txt");
        fs::write(&readme, "# App\n").unwrap();
        fs::write(&manifest, "pandas\n").unwrap();

        let updater = ReadmeUpdater::new(options(&temp_dir));
        updater.run().unwrap();

        fs::write(&manifest, "pydantic\n").unwrap();
        let report = updater.run().unwrap();
        assert_eq!(report.write.outcome, WriteOutcome::Replaced);

        let written = fs::read_to_string(&readme).unwrap();
        assert!(written.contains("- **Pydantic**: 資料驗證。"));
        assert!(!written.contains("Pandas"));
        assert_eq!(written.matches(START_MARKER).count(), 1);
    }
}
