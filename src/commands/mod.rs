//! Command implementations for campgen.
//!
//! Each command is one user action. Form state comes from the command-line
//! flags merged over the stored session; the result is a new artifact, a
//! saved file, or an error.

mod generate;
mod init;
mod prompt;
mod save;
mod show;

use crate::campaign::{CampaignRequest, DEFAULT_TONE};
use crate::cli::{CampaignArgs, Command, MessageArgs};
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::Result;
use crate::model::{GeminiClient, ModelSettings};
use crate::session::{MessageSettings, Session};

/// Default campaign duration when neither flags nor session supply one.
pub const DEFAULT_DURATION_DAYS: u32 = 30;

/// Default campaign budget when neither flags nor session supply one.
pub const DEFAULT_BUDGET: f64 = 1000.0;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let ctx = WorkspaceContext::resolve()?;
    tracing::debug!(root = %ctx.root.display(), "resolved workspace");

    match command {
        Command::Plan(args) => generate::cmd_plan(&ctx, args),
        Command::Messages(args) => generate::cmd_messages(&ctx, args),
        Command::Save(args) => save::cmd_save(&ctx, args),
        Command::Prompt(args) => prompt::cmd_prompt(&ctx, args),
        Command::Show => show::cmd_show(&ctx),
        Command::Reports(args) => save::cmd_reports(&ctx, args),
        Command::Reset => show::cmd_reset(&ctx),
        Command::Init(args) => init::cmd_init(&ctx, args),
    }
}

/// Build the campaign request from flags, falling back to the session.
pub(crate) fn resolve_request(
    args: &CampaignArgs,
    stored: Option<&CampaignRequest>,
) -> Result<CampaignRequest> {
    CampaignRequest::new(
        pick(&args.business_name, stored.map(|r| &r.business_name)),
        pick(&args.business_type, stored.map(|r| &r.business_type)),
        pick(&args.business_location, stored.map(|r| &r.business_location)),
        pick(&args.goal, stored.map(|r| &r.campaign_goal)),
        pick(&args.audience, stored.map(|r| &r.target_audience)),
        args.duration
            .or(stored.map(|r| r.duration_days))
            .unwrap_or(DEFAULT_DURATION_DAYS),
        args.budget
            .or(stored.map(|r| r.budget))
            .unwrap_or(DEFAULT_BUDGET),
    )
}

fn pick(flag: &Option<String>, stored: Option<&String>) -> String {
    flag.clone().or_else(|| stored.cloned()).unwrap_or_default()
}

/// Resolve tone and channels from flags, falling back to the session.
///
/// Channel names are trimmed and blank entries dropped; order and
/// duplicates are kept. `--no-channels` clears the list instead of falling
/// back to the stored one.
pub(crate) fn resolve_message_settings(
    args: &MessageArgs,
    stored: Option<&MessageSettings>,
) -> MessageSettings {
    let tone = args
        .tone
        .clone()
        .or_else(|| stored.map(|s| s.tone.clone()))
        .unwrap_or_else(|| DEFAULT_TONE.to_string());

    let channels: Vec<String> = args
        .channels
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    let channels = if args.no_channels {
        Vec::new()
    } else if channels.is_empty() {
        stored.map(|s| s.channels.clone()).unwrap_or_default()
    } else {
        channels
    };

    MessageSettings { tone, channels }
}

/// Load config and the session together.
pub(crate) fn load_state(ctx: &WorkspaceContext) -> Result<(Config, Session)> {
    let config = ctx.load_config()?;
    let session = Session::load(ctx)?;
    Ok((config, session))
}

/// Create the model client. Fails early if the API key is missing.
pub(crate) fn connect(ctx: &WorkspaceContext, config: &Config) -> Result<GeminiClient> {
    let api_key = config.api_key(&ctx.root)?;
    GeminiClient::new(ModelSettings::from_config(config, api_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_request;

    #[test]
    fn flags_override_stored_request() {
        let args = CampaignArgs {
            goal: Some("Launch a new menu".to_string()),
            budget: Some(50.0),
            ..Default::default()
        };
        let request = resolve_request(&args, Some(&sample_request())).unwrap();

        assert_eq!(request.business_name, "Acme Bakery");
        assert_eq!(request.campaign_goal, "Launch a new menu");
        assert_eq!(request.budget, 50.0);
        assert_eq!(request.duration_days, 30);
    }

    #[test]
    fn defaults_apply_without_session() {
        let args = CampaignArgs {
            business_name: Some("Shop".to_string()),
            goal: Some("Grow".to_string()),
            audience: Some("Everyone".to_string()),
            ..Default::default()
        };
        let request = resolve_request(&args, None).unwrap();

        assert_eq!(request.duration_days, DEFAULT_DURATION_DAYS);
        assert_eq!(request.budget, DEFAULT_BUDGET);
        assert_eq!(request.business_type, "");
    }

    #[test]
    fn missing_required_field_without_session_fails() {
        let err = resolve_request(&CampaignArgs::default(), None).unwrap_err();
        assert!(err.to_string().contains("business name is required"));
    }

    #[test]
    fn message_settings_fall_back_to_session_then_default() {
        let stored = MessageSettings {
            tone: "playful".to_string(),
            channels: vec!["Instagram".to_string()],
        };

        let settings = resolve_message_settings(&MessageArgs::default(), Some(&stored));
        assert_eq!(settings, stored);

        let settings = resolve_message_settings(&MessageArgs::default(), None);
        assert_eq!(settings.tone, "Professional");
        assert!(settings.channels.is_empty());
    }

    #[test]
    fn no_channels_clears_stored_channels() {
        let stored = MessageSettings {
            tone: "playful".to_string(),
            channels: vec!["Instagram".to_string(), "Email".to_string()],
        };
        let args = MessageArgs {
            no_channels: true,
            ..Default::default()
        };

        let settings = resolve_message_settings(&args, Some(&stored));
        assert_eq!(settings.tone, "playful");
        assert!(settings.channels.is_empty());
    }

    #[test]
    fn channel_flags_are_trimmed_in_order() {
        let args = MessageArgs {
            tone: None,
            no_channels: false,
            channels: vec![
                "Instagram".to_string(),
                " Email".to_string(),
                "".to_string(),
                "Instagram".to_string(),
            ],
        };
        let settings = resolve_message_settings(&args, None);
        assert_eq!(settings.channels, vec!["Instagram", "Email", "Instagram"]);
    }
}
