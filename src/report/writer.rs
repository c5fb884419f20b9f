//! Report rendering and writing.

use crate::campaign::{Artifacts, CampaignRequest};
use crate::error::{CampaignError, Result};
use crate::fs::atomic_write_file;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Source of the report timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// `campaign_plan_<YYYYMMDD_HHMMSS>.md`
pub fn report_filename(at: NaiveDateTime) -> String {
    format!("campaign_plan_{}.md", at.format("%Y%m%d_%H%M%S"))
}

/// Render the report markdown.
///
/// Artifact sections appear only for artifacts that are present, Plan
/// before Messages.
pub fn render_report(
    request: &CampaignRequest,
    artifacts: &Artifacts,
    generated_at: NaiveDateTime,
) -> String {
    let mut sections = vec![
        format!("# Campaign Plan for {}", request.business_name),
        format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!(
            "## Business Information\n\
             Business Name: {}\n\
             Business Type: {}\n\
             Location: {}",
            request.business_name, request.business_type, request.business_location
        ),
        format!(
            "## Campaign Details\n\
             Goal: {}\n\
             Target Audience: {}\n\
             Duration: {} days\n\
             Budget: ${}",
            request.campaign_goal, request.target_audience, request.duration_days, request.budget
        ),
    ];

    for (kind, text) in artifacts.iter() {
        sections.push(format!("## {}\n{}", kind.report_heading(), text.trim_end()));
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Write a report into `dir` and return its path.
///
/// Fails with `UserError` if the business name is empty and with `IoError`
/// if the file cannot be written. The write is atomic.
pub fn write_report(
    dir: &Path,
    request: &CampaignRequest,
    artifacts: &Artifacts,
    clock: &dyn Clock,
) -> Result<PathBuf> {
    if request.business_name.trim().is_empty() {
        return Err(CampaignError::UserError(
            "cannot save a campaign without a business name".to_string(),
        ));
    }

    let generated_at = clock.now();
    let path = dir.join(report_filename(generated_at));

    if path.exists() {
        tracing::warn!(
            path = %path.display(),
            "report saved within the same second as an earlier one; overwriting"
        );
    }

    let content = render_report(request, artifacts, generated_at);
    atomic_write_file(&path, &content)?;

    tracing::info!(
        path = %path.display(),
        artifacts = artifacts.iter().count(),
        "campaign report written"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{ArtifactKind, GeneratedArtifact};
    use crate::test_support::{fixed_time, sample_request};
    use regex::Regex;
    use std::fs;
    use tempfile::TempDir;

    fn artifacts(items: &[(ArtifactKind, &str)]) -> Artifacts {
        let mut artifacts = Artifacts::new();
        for (kind, text) in items {
            artifacts.insert(GeneratedArtifact::new(*kind, *text).unwrap());
        }
        artifacts
    }

    #[test]
    fn filename_uses_compact_timestamp() {
        assert_eq!(
            report_filename(fixed_time()),
            "campaign_plan_20240315_093005.md"
        );
    }

    #[test]
    fn written_filename_matches_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_report(
            temp_dir.path(),
            &sample_request(),
            &Artifacts::new(),
            &SystemClock,
        )
        .unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        let pattern = Regex::new(r"^campaign_plan_\d{8}_\d{6}\.md$").unwrap();
        assert!(pattern.is_match(name), "unexpected filename {}", name);
    }

    #[test]
    fn renders_full_report() {
        let report = render_report(
            &sample_request(),
            &artifacts(&[
                (ArtifactKind::Plan, "# The Plan"),
                (ArtifactKind::Messages, "# The Messages"),
            ]),
            fixed_time(),
        );

        let expected = "# Campaign Plan for Acme Bakery

Generated on: 2024-03-15 09:30:05

## Business Information
Business Name: Acme Bakery
Business Type: Bakery
Location: Austin

## Campaign Details
Goal: Increase foot traffic
Target Audience: Local families
Duration: 30 days
Budget: $1000

## Generated Campaign Plan
# The Plan

## Generated Campaign Messages
# The Messages
";
        assert_eq!(report, expected);
    }

    #[test]
    fn plan_only_report_omits_messages_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_report(
            temp_dir.path(),
            &sample_request(),
            &artifacts(&[(ArtifactKind::Plan, "plan body")]),
            &fixed_time,
        )
        .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("## Generated Campaign Plan\nplan body"));
        assert!(!content.contains("Generated Campaign Messages"));
    }

    #[test]
    fn messages_only_report_omits_plan_section() {
        let report = render_report(
            &sample_request(),
            &artifacts(&[(ArtifactKind::Messages, "slogan")]),
            fixed_time(),
        );
        assert!(report.contains("## Generated Campaign Messages\nslogan\n"));
        assert!(!report.contains("Generated Campaign Plan"));
    }

    #[test]
    fn sections_are_plan_then_messages() {
        let report = render_report(
            &sample_request(),
            &artifacts(&[
                (ArtifactKind::Messages, "messages body"),
                (ArtifactKind::Plan, "plan body"),
            ]),
            fixed_time(),
        );
        let plan_at = report.find("## Generated Campaign Plan").unwrap();
        let messages_at = report.find("## Generated Campaign Messages").unwrap();
        assert!(plan_at < messages_at);
    }

    #[test]
    fn report_without_artifacts_has_inputs_only() {
        let report = render_report(&sample_request(), &Artifacts::new(), fixed_time());
        assert!(report.ends_with("Budget: $1000\n"));
    }

    #[test]
    fn empty_business_name_is_rejected_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let mut request = sample_request();
        request.business_name = "  ".to_string();

        let err = write_report(temp_dir.path(), &request, &Artifacts::new(), &fixed_time)
            .unwrap_err();

        assert!(matches!(err, CampaignError::UserError(_)));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn same_second_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let request = sample_request();

        let first = write_report(
            temp_dir.path(),
            &request,
            &artifacts(&[(ArtifactKind::Plan, "first")]),
            &fixed_time,
        )
        .unwrap();
        let second = write_report(
            temp_dir.path(),
            &request,
            &artifacts(&[(ArtifactKind::Plan, "second")]),
            &fixed_time,
        )
        .unwrap();

        assert_eq!(first, second);
        assert!(fs::read_to_string(second).unwrap().contains("second"));
    }

    #[test]
    fn write_failure_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "file").unwrap();

        let err = write_report(&blocker, &sample_request(), &Artifacts::new(), &fixed_time)
            .unwrap_err();
        assert!(matches!(err, CampaignError::IoError(_)));
    }
}
