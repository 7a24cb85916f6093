use serde_json::Value;

use crate::transformations::{
    config::TransformConfig,
    errors::{user_facing_message, TransformError},
};

use super::{
    models::input_spec::InputSpec,
    structs::replicate_prediction_response::ReplicatePredictionResponse,
};

pub async fn create_prediction(
    input_spec: &InputSpec,
    config: &TransformConfig,
    client: &reqwest::Client,
) -> Result<ReplicatePredictionResponse, TransformError> {
    let api_token = config.api_token()?;
    let url = format!("{}/predictions", config.api_url);

    let result = client
        .post(url)
        .bearer_auth(api_token)
        .header("Prefer", "wait")
        .json(input_spec)
        .send()
        .await;

    match result {
        Ok(res) => read_prediction(res, "Failed to create prediction").await,
        Err(e) => {
            tracing::warn!("create_prediction: {:?}", e);
            Err(TransformError::RemoteService(
                "Failed to create prediction".to_string(),
            ))
        }
    }
}

pub async fn get_prediction_by_id(
    id: &str,
    config: &TransformConfig,
    client: &reqwest::Client,
) -> Result<ReplicatePredictionResponse, TransformError> {
    let api_token = config.api_token()?;
    let url = format!("{}/predictions/{}", config.api_url, id);

    match client.get(url).bearer_auth(api_token).send().await {
        Ok(res) => read_prediction(res, "Failed to get prediction status").await,
        Err(e) => {
            tracing::warn!("get_prediction_by_id: {:?}", e);
            Err(TransformError::RemoteService(
                "Failed to get prediction status".to_string(),
            ))
        }
    }
}

async fn read_prediction(
    res: reqwest::Response,
    fallback: &str,
) -> Result<ReplicatePredictionResponse, TransformError> {
    let status = res.status();
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("read_prediction: {:?}", e);
            return Err(TransformError::RemoteService(fallback.to_string()));
        }
    };

    if !status.is_success() {
        tracing::error!("replicate responded {}: {}", status, text);
        let detail = error_detail(&text).unwrap_or_else(|| fallback.to_string());
        return Err(TransformError::RemoteService(user_facing_message(&detail)));
    }

    match serde_json::from_str(&text) {
        Ok(prediction) => Ok(prediction),
        Err(e) => {
            tracing::warn!("read_prediction: {} {:?}", e, text);
            Err(TransformError::RemoteService(fallback.to_string()))
        }
    }
}

fn error_detail(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;

    value
        .get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
