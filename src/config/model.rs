//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for campgen.
///
/// This struct represents the contents of `campgen.yaml` in the working
/// directory. Every field has a default; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Model service
    // =========================================================================
    /// Gemini model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// HTTP timeout for one generation request.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// Sampling parameters.
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Content-safety thresholds.
    #[serde(default = "default_safety_settings")]
    pub safety_settings: Vec<SafetySetting>,

    // =========================================================================
    // Prompts and output
    // =========================================================================
    /// Replacement prompt templates.
    #[serde(default)]
    pub prompt_templates: PromptTemplates,

    /// Directory reports are saved to, relative to the working directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            request_timeout_seconds: default_request_timeout_seconds(),
            generation: GenerationSettings::default(),
            safety_settings: default_safety_settings(),
            prompt_templates: PromptTemplates::default(),
            output_dir: default_output_dir(),
        }
    }
}
