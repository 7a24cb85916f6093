use std::time::{Duration, Instant};

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::structs::backblaze_authorize_account_response::BackblazeAuthorizeAccountResponse;

pub static AUTHORIZE_ACCOUNT_URL: &str =
    "https://api.backblazeb2.com/b2api/v2/b2_authorize_account";

/// Account tokens are valid for 24 hours; refresh well before that.
const TOKEN_LIFETIME: Duration = Duration::from_secs(43200);

#[derive(Debug, Clone)]
pub struct Config {
    pub key_id: String,
    pub app_key: String,
    pub bucket_id: String,
    pub bucket_name: String,
    pub authorize_url: String,
}

impl Config {
    pub fn new(key_id: String, app_key: String, bucket_id: String, bucket_name: String) -> Self {
        Self {
            key_id,
            app_key,
            bucket_id,
            bucket_name,
            authorize_url: AUTHORIZE_ACCOUNT_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct B2 {
    pub token_time: Instant,
    pub authorization_token: String,
    pub api_url: String,
    pub download_url: String,
}

impl B2 {
    pub fn has_expired(&self) -> bool {
        self.token_time.elapsed() > TOKEN_LIFETIME
    }

    pub async fn login(config: &Config, client: &reqwest::Client) -> Result<B2, ApiError> {
        let credentials = base64::encode(format!("{}:{}", config.key_id, config.app_key));

        let result = client
            .get(&config.authorize_url)
            .header("Authorization", ["Basic ", &credentials].concat())
            .send()
            .await;

        let text = match result {
            Ok(res) => match res.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(%e);
                    return Err(DefaultApiError::InternalServerError.value());
                }
            },
            Err(e) => {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            }
        };

        match serde_json::from_str::<BackblazeAuthorizeAccountResponse>(&text) {
            Ok(res) => Ok(B2 {
                token_time: Instant::now(),
                authorization_token: res.authorization_token,
                api_url: res.api_url,
                download_url: res.download_url,
            }),
            Err(_) => {
                tracing::error!("failed to login to b2: {}", text);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }
}
