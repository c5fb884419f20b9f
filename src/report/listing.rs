//! Discovery of previously saved reports.

use crate::error::{CampaignError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static REPORT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^campaign_plan_(\d{8}_\d{6})\.md$").expect("Invalid report name regex")
});

/// A report file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    pub path: PathBuf,
    /// Timestamp encoded in the filename.
    pub saved_at: NaiveDateTime,
}

/// Parse the timestamp out of a report filename.
fn parse_report_name(name: &str) -> Option<NaiveDateTime> {
    let caps = REPORT_NAME_REGEX.captures(name)?;
    NaiveDateTime::parse_from_str(&caps[1], "%Y%m%d_%H%M%S").ok()
}

/// List saved reports in `dir`, newest first.
///
/// A missing directory yields an empty list.
pub fn list_reports(dir: &Path) -> Result<Vec<SavedReport>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        CampaignError::IoError(format!(
            "failed to read report directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut reports = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CampaignError::IoError(format!("failed to read directory entry: {}", e))
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(saved_at) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_report_name)
        {
            reports.push(SavedReport { path, saved_at });
        }
    }

    reports.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_valid_names_only() {
        assert!(parse_report_name("campaign_plan_20240315_093005.md").is_some());
        assert!(parse_report_name("campaign_plan_2024031_093005.md").is_none());
        assert!(parse_report_name("campaign_plan_20240315_093005.md.bak").is_none());
        assert!(parse_report_name("notes.md").is_none());
        // Matches the pattern but is not a real date.
        assert!(parse_report_name("campaign_plan_20241399_093005.md").is_none());
    }

    #[test]
    fn lists_newest_first_and_skips_other_files() {
        let temp_dir = TempDir::new().unwrap();
        for name in [
            "campaign_plan_20240101_120000.md",
            "campaign_plan_20240315_093005.md",
            "campaign_plan_20231231_235959.md",
            "README.md",
        ] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(temp_dir.path().join("campaign_plan_20250101_000000.md")).unwrap();

        let reports = list_reports(temp_dir.path()).unwrap();
        let names: Vec<_> = reports
            .iter()
            .map(|r| r.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "campaign_plan_20240315_093005.md",
                "campaign_plan_20240101_120000.md",
                "campaign_plan_20231231_235959.md",
            ]
        );
    }

    #[test]
    fn missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_reports(&temp_dir.path().join("nope")).unwrap().is_empty());
    }
}
