pub mod error;
pub mod health;
pub mod pages;
pub mod predict;
pub mod v1;
pub mod weather;

use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{app::AppState, config::Config};

pub fn router(state: AppState, cfg: &Config) -> Router {
    Router::new()
        .route("/", get(pages::intro))
        .route("/predict", get(pages::predict_page))
        .route("/windapi", post(weather::windapi))
        .route("/y_predict", post(predict::predict))
        .route("/result", post(predict::predict))
        .route("/health", get(health::health_check))
        .route("/healthz", get(health::healthz))
        .with_state(state.clone())
        .nest("/api/v1", v1::router(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
