//! Prompt generation for the model.
//!
//! - **Template**: `{variable}` substitution engine
//! - **Builders**: the built-in plan and messages prompts
//! - **PromptSet**: the prompts actually sent, with optional overrides from
//!   `campgen.yaml`

mod builders;
mod template;

pub use builders::{
    MESSAGE_TEMPLATE, MESSAGE_VARIABLES, PLAN_TEMPLATE, PLAN_VARIABLES, build_message_prompt,
    build_plan_prompt, message_prompt_for, plan_prompt_for,
};
pub use template::{TemplateError, placeholders, render_template};

use crate::campaign::{CampaignRequest, MessageRequest};
use crate::config::PromptTemplates;
use crate::error::{CampaignError, Result};

/// Resolves which template to use for each prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptSet<'a> {
    overrides: &'a PromptTemplates,
}

impl<'a> PromptSet<'a> {
    pub fn new(overrides: &'a PromptTemplates) -> Self {
        Self { overrides }
    }

    /// Plan prompt, using the configured override if any.
    pub fn plan(&self, request: &CampaignRequest) -> Result<String> {
        match &self.overrides.plan {
            None => Ok(plan_prompt_for(request)),
            Some(template) => {
                let variables = builders::plan_variables(
                    &request.business_info(),
                    &request.campaign_goal,
                    &request.target_audience,
                    request.duration_days,
                    request.budget,
                );
                render_template(template, &variables).map_err(|e| override_error("plan", e))
            }
        }
    }

    /// Messages prompt, using the configured override if any.
    pub fn messages(&self, request: &MessageRequest) -> Result<String> {
        match &self.overrides.messages {
            None => Ok(message_prompt_for(request)),
            Some(template) => {
                let variables = builders::message_variables(
                    &request.business_info,
                    &request.campaign_goal,
                    &request.target_audience,
                    &request.tone,
                    &request.channels,
                );
                render_template(template, &variables).map_err(|e| override_error("messages", e))
            }
        }
    }
}

fn override_error(name: &str, err: TemplateError) -> CampaignError {
    CampaignError::ConfigError(format!(
        "prompt_templates.{} in campgen.yaml is invalid: {}",
        name, err
    ))
}
