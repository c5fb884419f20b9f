//! Implementation of the `campgen init` command.
//!
//! Writes a `campgen.yaml` holding the default settings and makes sure the
//! session directory and `.env` stay out of version control.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::context::{STATE_DIR_NAME, WorkspaceContext};
use crate::error::{CampaignError, Result};
use crate::fs::atomic_write_file;
use std::fs;
use std::path::Path;

const CONFIG_HEADER: &str = "\
# campgen configuration.
#
# The API key is read from the environment variable named by `api_key_env`,
# or from a `.env` file next to this one. Do not put the key here.
#
# Optional prompt overrides go under `prompt_templates` as `plan` and
# `messages`, using the same {variable} placeholders as the built-in prompts.

";

/// Entries `init` keeps in `.gitignore`.
const IGNORED: &[&str] = &[".env"];

/// Execute the `campgen init` command.
pub fn cmd_init(ctx: &WorkspaceContext, args: InitArgs) -> Result<()> {
    let config_path = ctx.config_path();
    write_config(&config_path, args.force)?;
    let added = ensure_gitignore(&ctx.root.join(".gitignore"))?;

    println!("Wrote {}", config_path.display());
    if !added.is_empty() {
        println!("Added to .gitignore: {}", added.join(", "));
    }
    println!();
    println!("Next: set GEMINI_API_KEY (or add it to .env), then run `campgen plan`.");
    Ok(())
}

/// Write the default config, refusing to replace an existing file unless forced.
pub(crate) fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CampaignError::UserError(format!(
            "'{}' already exists.\n\nUse `campgen init --force` to overwrite it.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(path, &format!("{}{}", CONFIG_HEADER, yaml))
}

/// Append any missing ignore entries. Returns the entries that were added.
pub(crate) fn ensure_gitignore(path: &Path) -> Result<Vec<String>> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(CampaignError::IoError(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let state_entry = format!("{}/", STATE_DIR_NAME);
    let missing: Vec<String> = IGNORED
        .iter()
        .map(|entry| entry.to_string())
        .chain(std::iter::once(state_entry))
        .filter(|entry| !existing.lines().any(|line| line.trim() == entry))
        .collect();

    if missing.is_empty() {
        return Ok(missing);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    for entry in &missing {
        updated.push_str(entry);
        updated.push('\n');
    }
    atomic_write_file(path, &updated)?;

    Ok(missing)
}
