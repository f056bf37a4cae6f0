//! HTTP surface - JSON routes over the idea repository.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /ideas` — full feed, newest first (seeds an empty store).
//! - `POST /ideas` — create an idea from client input, 201.
//! - `POST /ideas/:id/like` — body `{ "action": "like" | "unlike" }`,
//!   defaulting to like; 200 with the updated idea, or 404.
//! - `DELETE /ideas/:id` — 200 `{ "success": true }`, or 404.
//!
//! All error bodies are `{ "error": "..." }`. Store failures surface as
//! 500, never as an empty 200.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use atlas_board::{http, IdeaRepository, InMemoryRecordStore};
//!
//! let repo = Arc::new(IdeaRepository::per_record(InMemoryRecordStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(repo.clone());
//!
//! // Or serve directly
//! http::serve(repo, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::idea::IdeaInput;
use crate::repository::{IdeaError, IdeaRepository, LikeAction};

/// Build an axum `Router` over the given repository.
pub fn router(repo: Arc<IdeaRepository>) -> Router {
    Router::new()
        .route("/ideas", get(list_ideas).post(create_idea))
        .route("/ideas/:id/like", post(like_idea))
        .route("/ideas/:id", axum::routing::delete(delete_idea))
        .with_state(repo)
}

/// Serve the board over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(repo: Arc<IdeaRepository>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(repo);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

#[derive(Debug, Default, Deserialize)]
struct LikeBody {
    #[serde(default)]
    action: LikeAction,
}

/// `GET /ideas` — the full feed, newest first.
async fn list_ideas(State(repo): State<Arc<IdeaRepository>>) -> Response {
    match repo.list_all() {
        Ok(ideas) => (StatusCode::OK, Json(ideas)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /ideas` — create an idea, returning it with 201.
async fn create_idea(
    State(repo): State<Arc<IdeaRepository>>,
    Json(input): Json<IdeaInput>,
) -> Response {
    match repo.create(input) {
        Ok(idea) => {
            tracing::info!(id = %idea.id, title = %idea.title, "idea created");
            (StatusCode::CREATED, Json(idea)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// `POST /ideas/:id/like` — apply a like or unlike. Missing body defaults
/// to like.
async fn like_idea(
    State(repo): State<Arc<IdeaRepository>>,
    Path(id): Path<String>,
    body: Option<Json<LikeBody>>,
) -> Response {
    let action = body.map(|Json(b)| b.action).unwrap_or_default();
    match repo.like(&id, action) {
        Ok(idea) => (StatusCode::OK, Json(idea)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `DELETE /ideas/:id` — hard delete.
async fn delete_idea(
    State(repo): State<Arc<IdeaRepository>>,
    Path(id): Path<String>,
) -> Response {
    match repo.delete(&id) {
        Ok(()) => {
            tracing::info!(id = %id, "idea deleted");
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Map repository errors onto the wire contract.
fn error_response(err: IdeaError) -> Response {
    match err {
        IdeaError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Idea not found" })),
        )
            .into_response(),
        other => {
            tracing::error!(error = %other, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response()
        }
    }
}
