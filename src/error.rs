//! Error types for the campgen CLI.
//!
//! Every failure surfaces to the user as a message on stderr plus an exit
//! code. Nothing is retried.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for campgen operations.
#[derive(Error, Debug)]
pub enum CampaignError {
    /// User provided invalid or incomplete input.
    #[error("{0}")]
    UserError(String),

    /// API key missing or configuration values invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The model service failed to return generated text.
    #[error("Generation failed: {0}")]
    ModelError(String),

    /// A report or session file could not be read or written.
    #[error("File operation failed: {0}")]
    IoError(String),
}

impl CampaignError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CampaignError::UserError(_) => exit_codes::USER_ERROR,
            CampaignError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            CampaignError::ModelError(_) => exit_codes::MODEL_FAILURE,
            CampaignError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for campgen operations.
pub type Result<T> = std::result::Result<T, CampaignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_maps_to_its_exit_code() {
        assert_eq!(
            CampaignError::UserError("x".into()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            CampaignError::ConfigError("x".into()).exit_code(),
            exit_codes::CONFIG_FAILURE
        );
        assert_eq!(
            CampaignError::ModelError("x".into()).exit_code(),
            exit_codes::MODEL_FAILURE
        );
        assert_eq!(
            CampaignError::IoError("x".into()).exit_code(),
            exit_codes::IO_FAILURE
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CampaignError::ConfigError("GEMINI_API_KEY is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: GEMINI_API_KEY is not set");

        let err = CampaignError::ModelError("request timed out".to_string());
        assert_eq!(err.to_string(), "Generation failed: request timed out");

        let err = CampaignError::UserError("business name is required".to_string());
        assert_eq!(err.to_string(), "business name is required");
    }
}
