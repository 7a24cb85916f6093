use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    Json, TypedHeader,
};
use serde_json::{json, Value};

use crate::{
    app::{
        errors::DefaultApiError, models::api_error::ApiError,
        structs::json_from_request::JsonFromRequest,
    },
    AppState,
};

use super::{service, structs::billing_event::BillingEvent};

pub async fn receive_webhook(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(event): JsonFromRequest<BillingEvent>,
) -> Result<Json<Value>, ApiError> {
    if authorization.0.token() != state.envy.billing_webhook_secret {
        return Err(DefaultApiError::PermissionDenied.value());
    }

    service::handle_event(&event, &state.pool).await?;

    Ok(Json(json!({ "received": true })))
}
