use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    response::IntoResponse,
    routing::{get, post},
    BoxError, Router,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    storage::{
        backblaze::{b2::Config, service::BackblazeStore},
        ObjectStore,
    },
    subscriptions::models::subscription::DEFAULT_TRIAL_DAYS,
    transformations::config::TransformConfig,
};

mod app;
mod auth;
mod history;
mod storage;
mod subscriptions;
mod transformations;
mod webhooks;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub http: reqwest::Client,
    pub store: Arc<dyn ObjectStore>,
    pub envy: Arc<Envy>,
    pub transform_config: Arc<TransformConfig>,
}

impl AppState {
    pub fn trial_days(&self) -> i64 {
        self.envy.trial_days.unwrap_or(DEFAULT_TRIAL_DAYS)
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let transform_config = TransformConfig::from_envy(&envy);
    if transform_config.api_token.is_none() {
        tracing::warn!("REPLICATE_API_TOKEN is not set; transform requests will fail");
    }

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    let pool = PgPoolOptions::new()
        .max_connections(50)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    tracing::info!("connected to db");

    let http = reqwest::Client::new();

    let store = BackblazeStore::connect(
        Config::new(
            envy.backblaze_key_id.to_string(),
            envy.backblaze_app_key.to_string(),
            envy.backblaze_bucket_id.to_string(),
            envy.backblaze_bucket_name.to_string(),
        ),
        http.clone(),
    )
    .await
    .expect("failed to login to backblaze");

    tracing::info!("logged in to backblaze");

    let state = AppState {
        pool,
        http,
        store: Arc::new(store),
        envy: Arc::new(envy),
        transform_config: Arc::new(transform_config),
    };

    // app
    let app = Router::new()
        .route("/", get(app::controller::get_root))
        // transformations
        .route("/transform", post(transformations::controller::transform))
        // history
        .route("/history", get(history::controller::get_history))
        // subscriptions
        .route(
            "/subscriptions/me",
            get(subscriptions::controller::get_subscription_from_request),
        )
        // webhooks
        .route(
            "/webhooks/billing",
            post(webhooks::billing::controller::receive_webhook),
        )
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!("middleware error: {}", err);
                    DefaultApiError::InternalServerError
                        .value()
                        .into_response()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
