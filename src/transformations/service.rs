use crate::{
    auth::jwt::models::claims::Claims,
    history::{self, models::transformation_history_item::TransformationHistoryItem},
    subscriptions, AppState,
};

use super::{
    dtos::transform_dto::TransformDto,
    models::transform_response::{TransformFailure, TransformResponse},
    runner::TransformationJobRunner,
    sleeper::TokioSleeper,
};

pub async fn transform_image(
    dto: &TransformDto,
    claims: &Claims,
    state: &AppState,
) -> Result<TransformResponse, TransformFailure> {
    subscriptions::service::ensure_access(&claims.id, state.trial_days(), &state.pool).await?;

    let sleeper = TokioSleeper;
    let runner = TransformationJobRunner::new(
        &state.transform_config,
        &state.http,
        &sleeper,
        state.store.as_ref(),
    );

    let response = runner.transform(&dto.image_url, &dto.options).await?;

    let item = TransformationHistoryItem::new(
        &claims.id,
        &dto.image_url,
        &response.transformed_image_url,
        &dto.options.style,
    );
    if let Err(e) = history::service::append_history_with_retry(&item, &state.pool).await {
        tracing::error!(
            "transform_image failed append_history_with_retry for {}: {}",
            claims.id,
            e.message
        );
    }

    Ok(response)
}
