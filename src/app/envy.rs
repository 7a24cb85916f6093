use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,

    pub jwt_secret: String,
    pub billing_webhook_secret: String,

    pub replicate_api_token: Option<String>,
    pub replicate_api_url: Option<String>,
    pub replicate_model_version: Option<String>,
    pub relocate_output: Option<bool>,
    pub poll_max_attempts: Option<u32>,
    pub poll_interval_ms: Option<u64>,

    pub trial_days: Option<i64>,

    pub backblaze_key_id: String,
    pub backblaze_app_key: String,
    pub backblaze_bucket_id: String,
    pub backblaze_bucket_name: String,
}
