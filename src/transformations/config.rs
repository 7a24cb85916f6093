use std::time::Duration;

use crate::app::envy::Envy;

use super::errors::TransformError;

pub static DEFAULT_API_URL: &str = "https://api.replicate.com/v1";
pub static DEFAULT_MODEL_VERSION: &str =
    "adirik/interior-design:76604baddc85b1b4616e1c6475eca080da339c8875bd4996705440484a6eac38";
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 30;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Settings for the transformation job runner, read once at startup.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub model_version: String,
    pub poll_max_attempts: u32,
    pub poll_interval: Duration,
    pub relocate: bool,
}

impl TransformConfig {
    pub fn from_envy(envy: &Envy) -> Self {
        Self {
            api_url: envy
                .replicate_api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: envy
                .replicate_api_token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            model_version: envy
                .replicate_model_version
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string()),
            poll_max_attempts: envy
                .poll_max_attempts
                .unwrap_or(DEFAULT_POLL_MAX_ATTEMPTS),
            poll_interval: Duration::from_millis(
                envy.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            ),
            relocate: envy.relocate_output.unwrap_or(true),
        }
    }

    pub fn api_token(&self) -> Result<&str, TransformError> {
        match &self.api_token {
            Some(token) => Ok(token),
            None => {
                tracing::error!("Replicate API token is not configured");
                Err(TransformError::Configuration(
                    "Replicate API token is not configured".to_string(),
                ))
            }
        }
    }
}
