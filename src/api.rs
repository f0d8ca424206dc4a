//! HTTP intake: request-shape validation, 202/422 responses, and
//! dispatching accepted requests onto a blocking solve.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::domain::SolveRequest;
use crate::engine::Engine;
use crate::webhook;

pub struct AppState {
    pub http_client: reqwest::Client,
}

pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        http_client: reqwest::Client::new(),
    });

    Router::new()
        .route("/health", get(health))
        .route("/vrp/v2/solve", post(solve_v2))
        .route("/vrp/solve", post(solve_v1))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "UP" })
}

#[derive(Serialize)]
struct AcceptResponse {
    message: &'static str,
    compute_id: i64,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

async fn solve_v2(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SolveRequest>,
) -> Result<(StatusCode, Json<AcceptResponse>), (StatusCode, Json<ErrorDetail>)> {
    accept_and_dispatch(state, request, "VRP v2 solve accepted").await
}

async fn solve_v1(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SolveRequest>,
) -> Result<(StatusCode, Json<AcceptResponse>), (StatusCode, Json<ErrorDetail>)> {
    accept_and_dispatch(state, request, "VRP solve accepted").await
}

async fn accept_and_dispatch(
    state: Arc<AppState>,
    request: SolveRequest,
    message: &'static str,
) -> Result<(StatusCode, Json<AcceptResponse>), (StatusCode, Json<ErrorDetail>)> {
    if let Err(err) = request.validate_shape() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail { detail: err.to_string() }),
        ));
    }

    let compute_id = request.compute_id;
    let webhook_url = request.webhook_url.clone();

    tokio::spawn(async move {
        let payload = match tokio::task::spawn_blocking(move || Engine::solve(compute_id, &request)).await {
            Ok(payload) => payload,
            Err(join_err) => {
                error!(compute_id, error = %join_err, "solve task panicked");
                return;
            }
        };

        if let Some(url) = webhook_url {
            webhook::deliver(&state.http_client, &url, &payload).await;
        }
    });

    Ok((StatusCode::ACCEPTED, Json(AcceptResponse { message, compute_id })))
}
