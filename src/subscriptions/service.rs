use sqlx::PgPool;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError, util::time};

use super::{errors::SubscriptionsApiError, models::subscription::Subscription};

/// Returns the user's subscription, starting a trial the first time the
/// user is seen.
pub async fn get_or_start_trial(
    user_id: &str,
    trial_days: i64,
    pool: &PgPool,
) -> Result<Subscription, ApiError> {
    let trial = Subscription::new_trial(user_id, trial_days, time::current_time_in_millis());

    let sqlx_result = sqlx::query(
        "
        INSERT INTO subscriptions (
            user_id, is_subscribed, trial_ends_at, customer_id, subscription_id, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO NOTHING
        ",
    )
    .bind(&trial.user_id)
    .bind(trial.is_subscribed)
    .bind(trial.trial_ends_at)
    .bind(&trial.customer_id)
    .bind(&trial.subscription_id)
    .bind(trial.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                tracing::debug!("started trial for {}", user_id);
            }
        }
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    }

    let sqlx_result =
        sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await;

    match sqlx_result {
        Ok(subscription) => Ok(subscription),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn ensure_access(
    user_id: &str,
    trial_days: i64,
    pool: &PgPool,
) -> Result<Subscription, ApiError> {
    let subscription = get_or_start_trial(user_id, trial_days, pool).await?;

    require_access(subscription, time::current_time_in_millis())
}

pub fn require_access(subscription: Subscription, now: i64) -> Result<Subscription, ApiError> {
    match subscription.has_access(now) {
        true => Ok(subscription),
        false => Err(SubscriptionsApiError::TrialEnded.value()),
    }
}

pub async fn activate_subscription(
    user_id: &str,
    customer_id: &str,
    subscription_id: &str,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        INSERT INTO subscriptions (
            user_id, is_subscribed, trial_ends_at, customer_id, subscription_id, created_at
        )
        VALUES ($1, TRUE, NULL, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE
        SET is_subscribed = TRUE, customer_id = $2, subscription_id = $3
        ",
    )
    .bind(user_id)
    .bind(customer_id)
    .bind(subscription_id)
    .bind(time::current_time_in_millis())
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

pub async fn deactivate_subscription(subscription_id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        UPDATE subscriptions SET is_subscribed = FALSE
        WHERE subscription_id = $1
        ",
    )
    .bind(subscription_id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(SubscriptionsApiError::SubscriptionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
