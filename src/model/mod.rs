//! Model service access.
//!
//! Generation goes through the [`ModelInvoker`] trait so command handlers can
//! run against the hosted model or a test double. Errors are passed through
//! to the caller unchanged; there is no retry and no fallback.

mod gemini;
mod wire;

pub use gemini::GeminiClient;

use crate::config::{Config, GenerationSettings, SafetySetting};
use crate::error::Result;
use std::fmt;
use std::time::Duration;

/// Something that turns a prompt into generated text.
pub trait ModelInvoker {
    /// Submit one prompt and return the generated markdown.
    ///
    /// Fails with `CampaignError::ModelError` on network, authentication, or
    /// content-safety failures.
    fn invoke(&self, prompt: &str) -> Result<String>;
}

/// Everything a client needs to talk to the model service.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct ModelSettings {
    pub api_base: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    pub generation: GenerationSettings,
    pub safety_settings: Vec<SafetySetting>,
}

impl ModelSettings {
    pub fn from_config(config: &Config, api_key: String) -> Self {
        Self {
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            api_key,
            timeout: Duration::from_secs(config.request_timeout_seconds),
            generation: config.generation.clone(),
            safety_settings: config.safety_settings.clone(),
        }
    }
}

impl fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSettings")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("generation", &self.generation)
            .field("safety_settings", &self.safety_settings)
            .finish()
    }
}
