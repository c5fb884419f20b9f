//! Generated artifacts and the mapping that collects them.

use crate::error::{CampaignError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of generated artifact.
///
/// Declaration order is report order: Plan before Messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Plan,
    Messages,
}

impl ArtifactKind {
    /// Heading used for this artifact in the saved report.
    pub fn report_heading(self) -> &'static str {
        match self {
            ArtifactKind::Plan => "Generated Campaign Plan",
            ArtifactKind::Messages => "Generated Campaign Messages",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Plan => f.pad("plan"),
            ArtifactKind::Messages => f.pad("messages"),
        }
    }
}

/// A unit of generated markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub text: String,
}

impl GeneratedArtifact {
    /// Wrap model output, rejecting blank text.
    pub fn new(kind: ArtifactKind, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CampaignError::ModelError(format!(
                "model returned an empty {}",
                kind
            )));
        }
        Ok(Self { kind, text })
    }
}

/// Artifacts produced so far, keyed by kind.
///
/// Iteration always yields Plan before Messages, regardless of insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artifacts(BTreeMap<ArtifactKind, String>);

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an artifact, replacing any earlier one of the same kind.
    pub fn insert(&mut self, artifact: GeneratedArtifact) {
        self.0.insert(artifact.kind, artifact.text);
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present artifacts in report order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        self.0.iter().map(|(kind, text)| (*kind, text.as_str()))
    }
}
