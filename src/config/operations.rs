//! Config loading, validation, and secret lookup.

use super::model::Config;
use crate::error::{CampaignError, Result};
use crate::prompt::{MESSAGE_VARIABLES, PLAN_VARIABLES, placeholders};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields are ignored. Returns `ConfigError` on read, parse, or
    /// validation failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CampaignError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config if the file exists, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            CampaignError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CampaignError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `model`, `api_base`, and `api_key_env` must be non-empty
    /// - `request_timeout_seconds` and `generation.max_output_tokens` must be positive
    /// - `generation.temperature` must be within 0.0..=2.0
    /// - `generation.top_p` must be within 0.0..=1.0
    /// - prompt template overrides may only reference known variables
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("model", &self.model),
            ("api_base", &self.api_base),
            ("api_key_env", &self.api_key_env),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} must not be empty", field)));
            }
        }

        if self.request_timeout_seconds == 0 {
            return Err(invalid(
                "request_timeout_seconds must be greater than 0".to_string(),
            ));
        }

        let generation = &self.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(invalid(format!(
                "generation.temperature must be between 0.0 and 2.0, got {}",
                generation.temperature
            )));
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(invalid(format!(
                "generation.top_p must be between 0.0 and 1.0, got {}",
                generation.top_p
            )));
        }
        if generation.max_output_tokens == 0 {
            return Err(invalid(
                "generation.max_output_tokens must be greater than 0".to_string(),
            ));
        }

        if let Some(template) = &self.prompt_templates.plan {
            check_template("plan", template, PLAN_VARIABLES)?;
        }
        if let Some(template) = &self.prompt_templates.messages {
            check_template("messages", template, MESSAGE_VARIABLES)?;
        }

        Ok(())
    }

    /// Read the API key from the configured environment variable.
    ///
    /// A `.env` file in `dir` is loaded first if present; variables already
    /// set in the environment take precedence.
    pub fn api_key(&self, dir: &Path) -> Result<String> {
        if let Err(e) = dotenvy::from_path(dir.join(".env"))
            && !e.not_found()
        {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
        }

        self.resolve_api_key(|name| std::env::var(name).ok())
    }

    /// Resolve the API key through `lookup`, rejecting missing or blank values.
    pub fn resolve_api_key<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(CampaignError::ConfigError(format!(
                "{} is not set.\n\n\
                 Export your Gemini API key before generating:\n  export {}=<your key>\n\
                 or add it to a .env file in this directory.",
                self.api_key_env, self.api_key_env
            ))),
        }
    }
}

fn invalid(message: String) -> CampaignError {
    CampaignError::ConfigError(format!("config validation failed: {}", message))
}

fn check_template(name: &str, template: &str, allowed: &[&str]) -> Result<()> {
    let names = placeholders(template).map_err(|e| {
        invalid(format!("prompt_templates.{} is malformed: {}", name, e))
    })?;

    if let Some(unknown) = names.iter().find(|n| !allowed.contains(&n.as_str())) {
        return Err(invalid(format!(
            "prompt_templates.{} references unknown variable '{}' (available: {})",
            name,
            unknown,
            allowed.join(", ")
        )));
    }

    Ok(())
}
