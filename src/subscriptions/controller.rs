use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    Json, TypedHeader,
};

use crate::{
    app::{models::api_error::ApiError, util::time},
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{models::subscription::SubscriptionStatus, service};

pub async fn get_subscription_from_request(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<SubscriptionStatus>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_or_start_trial(&claims.id, state.trial_days(), &state.pool).await {
        Ok(subscription) => Ok(Json(subscription.status(time::current_time_in_millis()))),
        Err(e) => Err(e),
    }
}
