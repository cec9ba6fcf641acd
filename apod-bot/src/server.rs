use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::module::apod::ApodFetcher;
use crate::module::poster::Poster;
use crate::module::telegram::TelegramPublisher;

pub struct AppState {
    pub config: Arc<Config>,
    pub poster: Poster,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::new();
        let fetcher = ApodFetcher::new(client.clone(), config.clone());
        let publisher = TelegramPublisher::new(client, config.clone());
        Self {
            config,
            poster: Poster::new(fetcher, publisher),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/trigger-post", get(trigger_post))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// An anyhow error rendered as a 500 with a JSON body.
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": format!("{:#}", self.0) });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Debug, Serialize)]
struct TriggerResponse {
    message: &'static str,
}

async fn trigger_post(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TriggerResponse>, AppError> {
    info!("Manual trigger received");
    state.poster.run_once().await?;
    Ok(Json(TriggerResponse {
        message: "Post triggered successfully",
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    bot_token: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_id: Option<String>,
    nasa_key: &'static str,
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() { "Present" } else { "Missing" }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        bot_token: presence(&state.config.bot_token),
        channel_id: state.config.channel_id.clone(),
        nasa_key: presence(&state.config.nasa_api_key),
    })
}
