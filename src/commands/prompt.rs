//! Implementation of the `campgen prompt` command.
//!
//! Prints the exact prompt `plan` or `messages` would send, without
//! contacting the model or touching the session.

use super::{load_state, resolve_message_settings, resolve_request};
use crate::campaign::MessageRequest;
use crate::cli::{PromptArgs, PromptKind};
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::Result;
use crate::prompt::PromptSet;
use crate::session::Session;

/// Render the requested prompt from flags merged over the session.
pub(crate) fn render_prompt(config: &Config, session: &Session, args: &PromptArgs) -> Result<String> {
    let request = resolve_request(&args.campaign, session.request.as_ref())?;
    let prompts = PromptSet::new(&config.prompt_templates);

    match args.kind {
        PromptKind::Plan => prompts.plan(&request),
        PromptKind::Messages => {
            let settings =
                resolve_message_settings(&args.messages, session.message_settings.as_ref());
            let message_request =
                MessageRequest::from_campaign(&request, settings.tone, settings.channels);
            prompts.messages(&message_request)
        }
    }
}

/// Execute the `campgen prompt` command.
pub fn cmd_prompt(ctx: &WorkspaceContext, args: PromptArgs) -> Result<()> {
    let (config, session) = load_state(ctx)?;
    println!("{}", render_prompt(&config, &session, &args)?);
    Ok(())
}
