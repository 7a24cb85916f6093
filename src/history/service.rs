use std::future::Future;

use sqlx::PgPool;
use tokio_retry::{strategy::FixedInterval, Retry};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::get_history_filter_dto::GetHistoryFilterDto,
    models::transformation_history_item::TransformationHistoryItem,
};

const APPEND_RETRY_INTERVAL_MS: u64 = 1000;
const APPEND_RETRIES: usize = 3;

pub async fn append_history_with_retry(
    item: &TransformationHistoryItem,
    pool: &PgPool,
) -> Result<(), ApiError> {
    retry_fixed(APPEND_RETRY_INTERVAL_MS, move || append_history(item, pool)).await
}

async fn retry_fixed<A, F, T>(interval_ms: u64, action: A) -> Result<T, ApiError>
where
    A: FnMut() -> F,
    F: Future<Output = Result<T, ApiError>>,
{
    let retry_strategy = FixedInterval::from_millis(interval_ms).take(APPEND_RETRIES);

    Retry::start(retry_strategy, action).await
}

pub async fn append_history(
    item: &TransformationHistoryItem,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        INSERT INTO transformation_history (
            id, user_id, original_image, transformed_image, style, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(&item.id)
    .bind(&item.user_id)
    .bind(&item.original_image)
    .bind(&item.transformed_image)
    .bind(&item.style)
    .bind(item.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_history(
    dto: &GetHistoryFilterDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<TransformationHistoryItem>, ApiError> {
    let sql = dto.to_sql();
    let mut sqlx = sqlx::query_as::<_, TransformationHistoryItem>(&sql).bind(&claims.id);

    if let Some(style) = &dto.style {
        sqlx = sqlx.bind(style);
    }
    if let Some(cursor) = dto.cursor {
        sqlx = sqlx.bind(cursor);
    }
    if let Some(cursor_id) = dto.bound_cursor_id() {
        sqlx = sqlx.bind(cursor_id);
    }

    match sqlx.fetch_all(pool).await {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
