use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SubscriptionsApiError {
    TrialEnded,
    SubscriptionNotFound,
}

impl SubscriptionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TrialEnded => ApiError {
                code: StatusCode::PAYMENT_REQUIRED,
                message: "Your free trial has ended. Subscribe to keep transforming rooms."
                    .to_string(),
            },
            Self::SubscriptionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Subscription not found.".to_string(),
            },
        }
    }
}
