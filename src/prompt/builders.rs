//! Plan and message prompt construction.
//!
//! The built-in templates are rendered with the same engine as
//! user-supplied overrides, so both share one variable vocabulary:
//!
//! | Template   | Variables                                                          |
//! |------------|--------------------------------------------------------------------|
//! | `plan`     | `business_info`, `campaign_goal`, `target_audience`, `duration`, `budget` |
//! | `messages` | `business_info`, `campaign_goal`, `target_audience`, `tone`, `channels`   |

use super::template::{render_template, vars};
use crate::campaign::{CampaignRequest, MessageRequest};
use std::collections::HashMap;

/// Variables available to plan templates.
pub const PLAN_VARIABLES: &[&str] = &[
    "business_info",
    "campaign_goal",
    "target_audience",
    "duration",
    "budget",
];

/// Variables available to message templates.
pub const MESSAGE_VARIABLES: &[&str] = &[
    "business_info",
    "campaign_goal",
    "target_audience",
    "tone",
    "channels",
];

/// Built-in plan prompt.
pub const PLAN_TEMPLATE: &str = "Create a marketing campaign plan for the following business:

Business Information: {business_info}
Campaign Goal: {campaign_goal}
Target Audience: {target_audience}
Campaign Duration: {duration} days
Budget: ${budget}

Please provide a detailed campaign plan including:
1. Campaign Strategy
2. Key Messages
3. Channel Selection
4. Timeline of Activities
5. Budget Allocation
6. Success Metrics

Format the output in markdown for easy reading.";

/// Built-in messages prompt.
pub const MESSAGE_TEMPLATE: &str = "Generate marketing messages for the following campaign:

Business Information: {business_info}
Campaign Goal: {campaign_goal}
Target Audience: {target_audience}
Tone of Voice: {tone}
Marketing Channels: {channels}

Please provide:
1. A catchy slogan for the campaign
2. Three short social media posts (max 280 characters each)
3. One longer form email content (200-300 words)
4. Two SMS messages (max 160 characters each)

Format the output in markdown for easy reading.";

/// Variables for a plan prompt.
pub fn plan_variables(
    business_info: &str,
    campaign_goal: &str,
    target_audience: &str,
    duration_days: u32,
    budget: f64,
) -> HashMap<String, String> {
    vars([
        ("business_info", business_info.to_string()),
        ("campaign_goal", campaign_goal.to_string()),
        ("target_audience", target_audience.to_string()),
        ("duration", duration_days.to_string()),
        ("budget", budget.to_string()),
    ])
}

/// Variables for a messages prompt.
///
/// Channels are joined with `", "` in the given order.
pub fn message_variables(
    business_info: &str,
    campaign_goal: &str,
    target_audience: &str,
    tone: &str,
    channels: &[String],
) -> HashMap<String, String> {
    vars([
        ("business_info", business_info.to_string()),
        ("campaign_goal", campaign_goal.to_string()),
        ("target_audience", target_audience.to_string()),
        ("tone", tone.to_string()),
        ("channels", channels.join(", ")),
    ])
}

/// Build the campaign plan prompt.
///
/// Inputs are embedded verbatim; the caller is responsible for supplying
/// non-empty text, a duration of at least one day, and a non-negative budget.
pub fn build_plan_prompt(
    business_info: &str,
    campaign_goal: &str,
    target_audience: &str,
    duration_days: u32,
    budget: f64,
) -> String {
    let variables = plan_variables(
        business_info,
        campaign_goal,
        target_audience,
        duration_days,
        budget,
    );
    render_template(PLAN_TEMPLATE, &variables)
        .expect("built-in plan template only references plan variables")
}

/// Build the campaign messages prompt.
///
/// Length limits in the prompt are instructions to the model and are not
/// checked here. An empty channel list leaves the channel phrase empty.
pub fn build_message_prompt(
    business_info: &str,
    campaign_goal: &str,
    target_audience: &str,
    tone: &str,
    channels: &[String],
) -> String {
    let variables = message_variables(
        business_info,
        campaign_goal,
        target_audience,
        tone,
        channels,
    );
    render_template(MESSAGE_TEMPLATE, &variables)
        .expect("built-in message template only references message variables")
}

/// Plan prompt for a validated campaign request.
pub fn plan_prompt_for(request: &CampaignRequest) -> String {
    build_plan_prompt(
        &request.business_info(),
        &request.campaign_goal,
        &request.target_audience,
        request.duration_days,
        request.budget,
    )
}

/// Messages prompt for a message request.
pub fn message_prompt_for(request: &MessageRequest) -> String {
    build_message_prompt(
        &request.business_info,
        &request.campaign_goal,
        &request.target_audience,
        &request.tone,
        &request.channels,
    )
}
