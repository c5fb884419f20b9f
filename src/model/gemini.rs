//! Blocking client for the Gemini `generateContent` endpoint.

use super::wire::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use super::{ModelInvoker, ModelSettings};
use crate::error::{CampaignError, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Instant;

/// Finish reason Gemini reports when output was withheld by safety filters.
const SAFETY_FINISH_REASON: &str = "SAFETY";

/// Model invoker backed by the hosted Gemini API.
#[derive(Debug)]
pub struct GeminiClient {
    http: Client,
    settings: ModelSettings,
}

impl GeminiClient {
    /// Create a client. Settings are fixed for the lifetime of the client.
    pub fn new(settings: ModelSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("campgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                CampaignError::ConfigError(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { http, settings })
    }

    /// Full URL of the generateContent call for the configured model.
    pub fn endpoint(&self) -> String {
        endpoint_url(&self.settings.api_base, &self.settings.model)
    }
}

impl ModelInvoker for GeminiClient {
    fn invoke(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest::new(
            prompt,
            &self.settings.generation,
            &self.settings.safety_settings,
        );

        let started = Instant::now();
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                CampaignError::ModelError(format!(
                    "could not reach the model service: {}",
                    e
                ))
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| {
            CampaignError::ModelError(format!("failed to read model response: {}", e))
        })?;

        tracing::info!(
            model = %self.settings.model,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            prompt_chars = prompt.len(),
            "generation request finished"
        );

        interpret_response(status, &text)
    }
}

pub(crate) fn endpoint_url(api_base: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        api_base.trim_end_matches('/'),
        model
    )
}

/// Turn an HTTP status and body into generated text or a `ModelError`.
pub(crate) fn interpret_response(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        return Err(status_error(status, body));
    }

    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        CampaignError::ModelError(format!("model service returned an unreadable response: {}", e))
    })?;

    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(CampaignError::ModelError(format!(
            "the prompt was blocked by content safety filters ({})",
            reason
        )));
    }

    let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
        CampaignError::ModelError("model service returned no candidates".to_string())
    })?;

    if candidate.finish_reason.as_deref() == Some(SAFETY_FINISH_REASON) {
        return Err(CampaignError::ModelError(
            "the response was blocked by content safety filters".to_string(),
        ));
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(CampaignError::ModelError(
            "model service returned an empty response".to_string(),
        ));
    }

    Ok(text)
}

fn status_error(status: StatusCode, body: &str) -> CampaignError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .map(|r| r.error)
        .ok();
    let message = detail
        .as_ref()
        .map(|d| d.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    let is_auth = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || detail
            .as_ref()
            .and_then(|d| d.status.as_deref())
            .is_some_and(|s| s == "PERMISSION_DENIED" || s == "UNAUTHENTICATED")
        || message.contains("API key not valid");

    if is_auth {
        CampaignError::ModelError(format!(
            "authentication failed ({}). Check your API key.",
            message
        ))
    } else {
        CampaignError::ModelError(format!(
            "model service returned HTTP {}: {}",
            status.as_u16(),
            message
        ))
    }
}
