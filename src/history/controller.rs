use axum::{
    extract::{Query, State},
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::validation::validation_message},
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{
    dtos::get_history_filter_dto::GetHistoryFilterDto,
    models::transformation_history_item::TransformationHistoryItem, service,
};

pub async fn get_history(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetHistoryFilterDto>,
) -> Result<Json<Vec<TransformationHistoryItem>>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: validation_message(&e),
        });
    }

    match service::get_history(&dto, &claims, &state.pool).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => Err(e),
    }
}
