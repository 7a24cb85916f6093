use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use validator::Validate;

use crate::{app::util::validation::validation_message, auth::jwt::models::claims::Claims, AppState};

use super::{
    dtos::transform_dto::TransformDto,
    models::transform_response::{TransformFailure, TransformResponse},
    service,
    structs::transform_json::TransformJson,
};

pub async fn transform(
    State(state): State<AppState>,
    authorization: Option<TypedHeader<Authorization<Bearer>>>,
    payload: Result<TransformJson<TransformDto>, TransformFailure>,
) -> Result<Json<TransformResponse>, TransformFailure> {
    let Some(TypedHeader(authorization)) = authorization else {
        return Err(TransformFailure {
            code: StatusCode::UNAUTHORIZED,
            message: "Missing authorization token.".to_string(),
        });
    };
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    let TransformJson(dto) = payload?;
    let dto = dto.sanitized();

    if let Err(e) = dto.validate() {
        return Err(TransformFailure {
            code: StatusCode::BAD_REQUEST,
            message: validation_message(&e),
        });
    }

    tracing::debug!("transform request from {} with style {}", claims.id, dto.options.style);

    match service::transform_image(&dto, &claims, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request},
        response::Response,
        routing::post,
        Router,
    };
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::{envy::Envy, models::api_error::ApiError, util::time},
        storage::{models::file_properties::FileProperties, ObjectStore},
        transformations::config::TransformConfig,
    };

    const SECRET: &str = "jwt-secret";

    struct UnusedStore;

    #[async_trait]
    impl ObjectStore for UnusedStore {
        async fn put_object(&self, file_properties: FileProperties) -> Result<String, ApiError> {
            Ok(format!("https://storage.test/{}", file_properties.file_name))
        }
    }

    fn test_app() -> Router {
        let envy = Envy {
            app_env: "test".to_string(),
            port: None,
            database_url: "postgres://localhost/roomify_test".to_string(),
            jwt_secret: SECRET.to_string(),
            billing_webhook_secret: "billing-secret".to_string(),
            replicate_api_token: Some("test-token".to_string()),
            replicate_api_url: Some("http://127.0.0.1:9".to_string()),
            replicate_model_version: None,
            relocate_output: Some(false),
            poll_max_attempts: None,
            poll_interval_ms: None,
            trial_days: None,
            backblaze_key_id: "key-id".to_string(),
            backblaze_app_key: "app-key".to_string(),
            backblaze_bucket_id: "bucket-id".to_string(),
            backblaze_bucket_name: "rooms".to_string(),
        };
        let transform_config = TransformConfig::from_envy(&envy);
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(100))
            .connect_lazy(&envy.database_url)
            .unwrap();

        let state = AppState {
            pool,
            http: reqwest::Client::new(),
            store: Arc::new(UnusedStore),
            envy: Arc::new(envy),
            transform_config: Arc::new(transform_config),
        };

        Router::new()
            .route("/transform", post(transform))
            .with_state(state)
    }

    fn bearer(secret: &str) -> String {
        let now = (time::current_time_in_millis() / 1000) as u64;
        let claims = Claims {
            id: "user-1".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let jwt = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        format!("Bearer {}", jwt)
    }

    async fn send(authorization: Option<String>, body: &str, json_content: bool) -> Response {
        let mut request = Request::builder().method("POST").uri("/transform");
        if let Some(authorization) = authorization {
            request = request.header(header::AUTHORIZATION, authorization);
        }
        if json_content {
            request = request.header(header::CONTENT_TYPE, "application/json");
        }

        test_app()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_failed_progress(body: &Value) {
        let error = body["error"].as_str().unwrap();
        assert!(!error.is_empty());
        assert_eq!(body["progress"]["status"], "failed");
        assert_eq!(body["progress"]["progress"], 0);
        assert_eq!(body["progress"]["message"], error);
    }

    #[tokio::test]
    async fn missing_image_url_field_returns_failed_progress() {
        let response = send(
            Some(bearer(SECRET)),
            &json!({ "options": { "style": "modern" } }).to_string(),
            true,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_failed_progress(&body);
        assert!(body["error"].as_str().unwrap().contains("imageUrl"));
    }

    #[tokio::test]
    async fn non_json_body_returns_failed_progress() {
        let response = send(Some(bearer(SECRET)), "not json", false).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_failed_progress(&body_json(response).await);
    }

    #[tokio::test]
    async fn empty_image_url_returns_failed_progress() {
        let response = send(
            Some(bearer(SECRET)),
            &json!({ "imageUrl": "  ", "options": { "style": "modern" } }).to_string(),
            true,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_failed_progress(&body);
        assert_eq!(body["error"], "Image URL is required");
    }

    #[tokio::test]
    async fn missing_authorization_returns_failed_progress() {
        let response = send(
            None,
            &json!({ "imageUrl": "https://x/room.jpg", "options": { "style": "modern" } })
                .to_string(),
            true,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_failed_progress(&body_json(response).await);
    }

    #[tokio::test]
    async fn bad_token_is_checked_before_the_body() {
        let response = send(Some(bearer("other-secret")), "not json", false).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_failed_progress(&body);
        assert_eq!(body["error"], "Invalid token.");
    }
}
