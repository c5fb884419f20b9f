//! Implementation of `campgen plan` and `campgen messages`.
//!
//! Generation is a single model call. On success the artifact is printed
//! first and then stored in the session; on failure nothing is stored.

use super::{connect, load_state, resolve_message_settings, resolve_request};
use crate::campaign::{ArtifactKind, CampaignRequest, GeneratedArtifact, MessageRequest};
use crate::cli::{MessagesArgs, PlanArgs};
use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::{CampaignError, Result};
use crate::model::ModelInvoker;
use crate::prompt::PromptSet;
use crate::session::{MessageSettings, Session};
use std::io::{self, Write};

/// Generate a campaign plan for a request.
pub(crate) fn generate_plan(
    invoker: &dyn ModelInvoker,
    prompts: PromptSet<'_>,
    request: &CampaignRequest,
) -> Result<GeneratedArtifact> {
    let prompt = prompts.plan(request)?;
    tracing::debug!(chars = prompt.len(), "built plan prompt");
    let text = invoker.invoke(&prompt)?;
    GeneratedArtifact::new(ArtifactKind::Plan, text)
}

/// Generate campaign messages for a request.
pub(crate) fn generate_messages(
    invoker: &dyn ModelInvoker,
    prompts: PromptSet<'_>,
    request: &MessageRequest,
) -> Result<GeneratedArtifact> {
    let prompt = prompts.messages(request)?;
    tracing::debug!(
        chars = prompt.len(),
        channels = request.channels.len(),
        "built messages prompt"
    );
    let text = invoker.invoke(&prompt)?;
    GeneratedArtifact::new(ArtifactKind::Messages, text)
}

/// Write generated markdown to `out`.
fn emit(out: &mut dyn Write, artifact: &GeneratedArtifact) -> Result<()> {
    writeln!(out, "{}", artifact.text)
        .and_then(|()| out.flush())
        .map_err(|e| {
            CampaignError::IoError(format!("failed to write generated {}: {}", artifact.kind, e))
        })
}

/// Generate a plan, write it to `out`, then record it with its request in
/// the session.
///
/// The artifact is written before the session is saved, so a failed save
/// still leaves the generated text with the user.
pub(crate) fn record_plan(
    ctx: &WorkspaceContext,
    config: &Config,
    session: &mut Session,
    invoker: &dyn ModelInvoker,
    request: CampaignRequest,
    out: &mut dyn Write,
) -> Result<GeneratedArtifact> {
    let artifact = generate_plan(invoker, PromptSet::new(&config.prompt_templates), &request)?;
    emit(out, &artifact)?;

    session.set_request(request);
    session.record_artifact(artifact.clone());
    session.save(ctx)?;

    Ok(artifact)
}

/// Generate messages, write them to `out`, then record them with their
/// inputs in the session.
pub(crate) fn record_messages(
    ctx: &WorkspaceContext,
    config: &Config,
    session: &mut Session,
    invoker: &dyn ModelInvoker,
    request: CampaignRequest,
    settings: MessageSettings,
    out: &mut dyn Write,
) -> Result<GeneratedArtifact> {
    let message_request =
        MessageRequest::from_campaign(&request, settings.tone.clone(), settings.channels.clone());
    let artifact = generate_messages(
        invoker,
        PromptSet::new(&config.prompt_templates),
        &message_request,
    )?;
    emit(out, &artifact)?;

    session.set_request(request);
    session.message_settings = Some(settings);
    session.record_artifact(artifact.clone());
    session.save(ctx)?;

    Ok(artifact)
}

/// Execute the `campgen plan` command.
pub fn cmd_plan(ctx: &WorkspaceContext, args: PlanArgs) -> Result<()> {
    let (config, mut session) = load_state(ctx)?;
    let request = resolve_request(&args.campaign, session.request.as_ref())?;
    let client = connect(ctx, &config)?;

    tracing::info!(business = %request.business_name, "generating campaign plan");
    record_plan(ctx, &config, &mut session, &client, request, &mut io::stdout())?;
    Ok(())
}

/// Execute the `campgen messages` command.
pub fn cmd_messages(ctx: &WorkspaceContext, args: MessagesArgs) -> Result<()> {
    let (config, mut session) = load_state(ctx)?;
    let request = resolve_request(&args.campaign, session.request.as_ref())?;
    let settings = resolve_message_settings(&args.messages, session.message_settings.as_ref());
    let client = connect(ctx, &config)?;

    tracing::info!(
        business = %request.business_name,
        tone = %settings.tone,
        channels = ?settings.channels,
        "generating campaign messages"
    );
    record_messages(
        ctx,
        &config,
        &mut session,
        &client,
        request,
        settings,
        &mut io::stdout(),
    )?;
    Ok(())
}
