use axum::http::StatusCode;
use sqlx::PgPool;

use crate::{app::models::api_error::ApiError, subscriptions};

use super::structs::billing_event::{BillingEvent, CheckoutSessionObject, SubscriptionObject};

#[derive(Debug, PartialEq)]
pub enum BillingAction {
    Activate {
        user_id: String,
        customer_id: String,
        subscription_id: String,
    },
    Deactivate {
        subscription_id: String,
    },
    Ignore,
}

pub fn billing_action(event: &BillingEvent) -> Result<BillingAction, ApiError> {
    match event.event_type.as_str() {
        "checkout.session.completed" => {
            let session: CheckoutSessionObject = parse_object(event)?;

            match (
                session.client_reference_id,
                session.customer,
                session.subscription,
            ) {
                (Some(user_id), Some(customer_id), Some(subscription_id)) => {
                    Ok(BillingAction::Activate {
                        user_id,
                        customer_id,
                        subscription_id,
                    })
                }
                _ => {
                    tracing::warn!("checkout session is missing user, customer or subscription");
                    Ok(BillingAction::Ignore)
                }
            }
        }
        "customer.subscription.deleted" => {
            let subscription: SubscriptionObject = parse_object(event)?;

            Ok(BillingAction::Deactivate {
                subscription_id: subscription.id,
            })
        }
        _ => Ok(BillingAction::Ignore),
    }
}

fn parse_object<T: serde::de::DeserializeOwned>(event: &BillingEvent) -> Result<T, ApiError> {
    match serde_json::from_value(event.data.object.clone()) {
        Ok(object) => Ok(object),
        Err(e) => {
            tracing::error!("billing event {} has unexpected shape: {}", event.event_type, e);
            Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Malformed event object.".to_string(),
            })
        }
    }
}

pub async fn handle_event(event: &BillingEvent, pool: &PgPool) -> Result<(), ApiError> {
    match billing_action(event)? {
        BillingAction::Activate {
            user_id,
            customer_id,
            subscription_id,
        } => {
            tracing::info!("activating subscription {} for {}", subscription_id, user_id);
            subscriptions::service::activate_subscription(
                &user_id,
                &customer_id,
                &subscription_id,
                pool,
            )
            .await
        }
        BillingAction::Deactivate { subscription_id } => {
            tracing::info!("deactivating subscription {}", subscription_id);

            match subscriptions::service::deactivate_subscription(&subscription_id, pool).await {
                Ok(_) => Ok(()),
                Err(e) if e.code == StatusCode::NOT_FOUND => {
                    tracing::warn!("no user holds subscription {}", subscription_id);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        BillingAction::Ignore => {
            tracing::debug!("not handling billing event type: {}", event.event_type);
            Ok(())
        }
    }
}
