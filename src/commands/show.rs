//! Implementation of `campgen show` and `campgen reset`.

use crate::campaign::ArtifactKind;
use crate::context::WorkspaceContext;
use crate::error::Result;
use crate::session::Session;

/// Render the session summary printed by `campgen show`.
pub(crate) fn render_session(session: &Session) -> String {
    let Some(request) = &session.request else {
        return "No campaign stored. Run `campgen plan` to start one.".to_string();
    };

    let mut lines = vec![
        format!("Campaign: {}", request.business_name),
        String::new(),
        format!("  Business Type:   {}", request.business_type),
        format!("  Location:        {}", request.business_location),
        format!("  Goal:            {}", request.campaign_goal),
        format!("  Target Audience: {}", request.target_audience),
        format!("  Duration:        {} days", request.duration_days),
        format!("  Budget:          ${}", request.budget),
    ];

    if let Some(settings) = &session.message_settings {
        lines.push(format!("  Tone:            {}", settings.tone));
        lines.push(format!("  Channels:        {}", settings.channels.join(", ")));
    }

    lines.push(String::new());
    lines.push("Artifacts:".to_string());
    for kind in [ArtifactKind::Plan, ArtifactKind::Messages] {
        let state = match session.artifacts.get(kind) {
            Some(text) => format!("generated ({} chars)", text.chars().count()),
            None => "not generated".to_string(),
        };
        lines.push(format!("  {:<9} {}", kind, state));
    }

    if let Some(updated_at) = session.updated_at {
        lines.push(String::new());
        lines.push(format!(
            "Last updated: {}",
            updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    lines.join("\n")
}

/// Execute the `campgen show` command.
pub fn cmd_show(ctx: &WorkspaceContext) -> Result<()> {
    let session = Session::load(ctx)?;
    println!("{}", render_session(&session));
    Ok(())
}

/// Execute the `campgen reset` command.
pub fn cmd_reset(ctx: &WorkspaceContext) -> Result<()> {
    if Session::clear(ctx)? {
        println!("Cleared stored campaign.");
    } else {
        println!("No stored campaign to clear.");
    }
    Ok(())
}
