//! Working directory context for campgen.
//!
//! All commands resolve their file locations through this module so that the
//! config file, session state, and saved reports are found the same way no
//! matter which command runs.

use crate::config::Config;
use crate::error::{CampaignError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "campgen.yaml";

/// Directory holding local session state.
pub const STATE_DIR_NAME: &str = ".campgen";

/// Session file name within the state directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Resolved paths for one campgen invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    /// Directory the command runs in.
    pub root: PathBuf,

    /// `{root}/.campgen/`
    pub state_dir: PathBuf,
}

impl WorkspaceContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            CampaignError::IoError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context rooted at a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let state_dir = root.join(STATE_DIR_NAME);
        Self { root, state_dir }
    }

    /// Path to `campgen.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Path to the session file.
    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join(SESSION_FILE_NAME)
    }

    /// Load `campgen.yaml`, falling back to defaults when it is absent.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_default(self.config_path())
    }

    /// Directory reports are written to.
    ///
    /// An explicit override wins over the configured `output_dir`; relative
    /// paths are resolved against the context root.
    pub fn output_dir(&self, config: &Config, override_dir: Option<&Path>) -> PathBuf {
        let dir = override_dir.unwrap_or_else(|| Path::new(&config.output_dir));
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_are_rooted_at_context_dir() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());

        assert_eq!(ctx.config_path(), temp_dir.path().join("campgen.yaml"));
        assert_eq!(
            ctx.session_path(),
            temp_dir.path().join(".campgen").join("session.json")
        );
    }

    #[test]
    fn output_dir_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());
        let mut config = Config::default();
        config.output_dir = "reports".to_string();

        assert_eq!(ctx.output_dir(&config, None), temp_dir.path().join("reports"));
        assert_eq!(
            ctx.output_dir(&config, Some(Path::new("other"))),
            temp_dir.path().join("other")
        );

        let absolute = temp_dir.path().join("abs");
        assert_eq!(ctx.output_dir(&config, Some(&absolute)), absolute);
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::resolve_from(temp_dir.path());
        assert_eq!(ctx.load_config().unwrap(), Config::default());
    }
}
