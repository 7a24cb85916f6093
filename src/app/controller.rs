use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::models::api_error::ApiError;

pub async fn get_root(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({
        "app_env": state.envy.app_env,
        "relocate": state.transform_config.relocate,
    })))
}
