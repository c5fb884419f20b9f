//! Campaign and message request types.

use crate::error::{CampaignError, Result};
use serde::{Deserialize, Serialize};

/// Tone used for message generation when none is given.
pub const DEFAULT_TONE: &str = "Professional";

/// Business and campaign parameters for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub business_name: String,
    pub business_type: String,
    pub business_location: String,
    pub campaign_goal: String,
    pub target_audience: String,
    /// Campaign length in days (at least 1).
    pub duration_days: u32,
    /// Budget in dollars (non-negative).
    pub budget: f64,
}

impl CampaignRequest {
    /// Build and validate a request.
    pub fn new(
        business_name: impl Into<String>,
        business_type: impl Into<String>,
        business_location: impl Into<String>,
        campaign_goal: impl Into<String>,
        target_audience: impl Into<String>,
        duration_days: u32,
        budget: f64,
    ) -> Result<Self> {
        let request = Self {
            business_name: business_name.into(),
            business_type: business_type.into(),
            business_location: business_location.into(),
            campaign_goal: campaign_goal.into(),
            target_audience: target_audience.into(),
            duration_days,
            budget,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check required fields and numeric bounds.
    ///
    /// Business type and location may be blank; the name, goal, and audience
    /// may not.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("business name", &self.business_name, "--business-name")?;
        require_non_empty("campaign goal", &self.campaign_goal, "--goal")?;
        require_non_empty("target audience", &self.target_audience, "--audience")?;

        if self.duration_days == 0 {
            return Err(CampaignError::UserError(
                "campaign duration must be at least 1 day".to_string(),
            ));
        }

        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(CampaignError::UserError(format!(
                "campaign budget must be a non-negative amount, got {}",
                self.budget
            )));
        }

        Ok(())
    }

    /// One-line business summary embedded into prompts.
    ///
    /// Format: `<name>, a <type> based in <location>`.
    pub fn business_info(&self) -> String {
        format!(
            "{}, a {} based in {}",
            self.business_name, self.business_type, self.business_location
        )
    }
}

fn require_non_empty(field: &str, value: &str, flag: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CampaignError::UserError(format!(
            "{} is required.\n\nProvide it with {} or run `campgen plan` first to store it.",
            field, flag
        )));
    }
    Ok(())
}

/// Inputs for message generation.
///
/// Channels keep the order given by the user; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub business_info: String,
    pub campaign_goal: String,
    pub target_audience: String,
    pub tone: String,
    pub channels: Vec<String>,
}

impl MessageRequest {
    /// Derive a message request from a campaign request.
    pub fn from_campaign(
        campaign: &CampaignRequest,
        tone: impl Into<String>,
        channels: Vec<String>,
    ) -> Self {
        Self {
            business_info: campaign.business_info(),
            campaign_goal: campaign.campaign_goal.clone(),
            target_audience: campaign.target_audience.clone(),
            tone: tone.into(),
            channels,
        }
    }
}
