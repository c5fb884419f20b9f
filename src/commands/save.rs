//! Implementation of `campgen save` and `campgen reports`.

use super::load_state;
use crate::cli::{ReportsArgs, SaveArgs};
use crate::context::WorkspaceContext;
use crate::error::{CampaignError, Result};
use crate::report::{Clock, SystemClock, list_reports, write_report};
use crate::session::Session;
use std::path::{Path, PathBuf};

/// Write the session's request and artifacts to a report in `dir`.
pub(crate) fn save_session(session: &Session, dir: &Path, clock: &dyn Clock) -> Result<PathBuf> {
    let request = session.request.as_ref().ok_or_else(|| {
        CampaignError::UserError(
            "nothing to save yet.\n\n\
             Run `campgen plan` or `campgen messages` with your campaign details first."
                .to_string(),
        )
    })?;

    if session.artifacts.is_empty() {
        tracing::warn!("saving a report without any generated artifacts");
    }

    write_report(dir, request, &session.artifacts, clock)
}

/// Execute the `campgen save` command.
pub fn cmd_save(ctx: &WorkspaceContext, args: SaveArgs) -> Result<()> {
    let (config, session) = load_state(ctx)?;
    let dir = ctx.output_dir(&config, args.output_dir.as_deref());

    let path = save_session(&session, &dir, &SystemClock)?;

    println!("Campaign saved to {}", path.display());
    Ok(())
}

/// Execute the `campgen reports` command.
pub fn cmd_reports(ctx: &WorkspaceContext, args: ReportsArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let dir = ctx.output_dir(&config, args.output_dir.as_deref());

    let reports = list_reports(&dir)?;
    if reports.is_empty() {
        println!("No saved campaign reports in {}.", dir.display());
        return Ok(());
    }

    println!("Saved campaign reports ({}):", reports.len());
    println!();
    for report in &reports {
        println!(
            "  {}  {}",
            report.saved_at.format("%Y-%m-%d %H:%M:%S"),
            report.path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{ArtifactKind, GeneratedArtifact};
    use crate::test_support::{fixed_time, sample_request};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_session_cannot_be_saved() {
        let temp_dir = TempDir::new().unwrap();
        let err = save_session(&Session::default(), temp_dir.path(), &fixed_time).unwrap_err();
        assert!(matches!(err, CampaignError::UserError(_)));
        assert!(err.to_string().contains("nothing to save yet"));
    }

    #[test]
    fn saves_only_generated_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = Session::default();
        session.set_request(sample_request());
        session.record_artifact(GeneratedArtifact::new(ArtifactKind::Plan, "# Plan").unwrap());

        let path = save_session(&session, temp_dir.path(), &fixed_time).unwrap();

        assert_eq!(
            path,
            temp_dir.path().join("campaign_plan_20240315_093005.md")
        );
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Campaign Plan for Acme Bakery\n"));
        assert!(content.contains("## Generated Campaign Plan\n# Plan"));
        assert!(!content.contains("## Generated Campaign Messages"));
    }

    #[test]
    fn saved_report_is_listed() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = Session::default();
        session.set_request(sample_request());

        let path = save_session(&session, temp_dir.path(), &fixed_time).unwrap();

        let reports = list_reports(temp_dir.path()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].path, path);
        assert_eq!(reports[0].saved_at, fixed_time());
    }
}
