//! Session state carried between commands.
//!
//! Each command is a single action, so the form inputs and generated
//! artifacts from earlier commands are kept in `.campgen/session.json`. The
//! session only ever contains artifacts that were actually produced.

use crate::campaign::{Artifacts, CampaignRequest, GeneratedArtifact};
use crate::context::WorkspaceContext;
use crate::error::{CampaignError, Result};
use crate::fs::atomic_write_file;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

/// Tone and channels used for the last message generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSettings {
    pub tone: String,
    pub channels: Vec<String>,
}

/// Form state and artifacts from earlier commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub request: Option<CampaignRequest>,
    pub message_settings: Option<MessageSettings>,
    pub artifacts: Artifacts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Load the session, or an empty one if none has been saved.
    pub fn load(ctx: &WorkspaceContext) -> Result<Self> {
        let path = ctx.session_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            CampaignError::IoError(format!(
                "failed to read session file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CampaignError::UserError(format!(
                "session file '{}' is corrupt: {}\n\nRun `campgen reset` to start over.",
                path.display(),
                e
            ))
        })
    }

    /// Persist the session atomically.
    pub fn save(&mut self, ctx: &WorkspaceContext) -> Result<()> {
        self.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            CampaignError::IoError(format!("failed to serialize session: {}", e))
        })?;
        atomic_write_file(ctx.session_path(), &json)
    }

    /// Remove the session file. Returns whether one existed.
    pub fn clear(ctx: &WorkspaceContext) -> Result<bool> {
        let path = ctx.session_path();
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| {
            CampaignError::IoError(format!(
                "failed to remove session file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }

    /// Record a new request.
    ///
    /// Artifacts generated from a different request no longer describe the
    /// campaign, so they are dropped.
    pub fn set_request(&mut self, request: CampaignRequest) {
        if self.request.as_ref() != Some(&request) {
            if !self.artifacts.is_empty() {
                tracing::info!("campaign inputs changed; discarding earlier artifacts");
            }
            self.artifacts = Artifacts::new();
        }
        self.request = Some(request);
    }

    pub fn record_artifact(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.insert(artifact);
    }
}
