//! REST API endpoint handlers.
//!
//! All handlers delegate to the [`BookStore`](bookshelf_core::BookStore)
//! held by [`AppState`]. Paths below are relative to the configured base
//! path (`/api/books` by default).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/hello` | Liveness acknowledgment |
//! | `GET` | `/` | List all books |
//! | `GET` | `/{id}` | Get a single book |
//! | `POST` | `/` | Create a book |
//! | `PUT` | `/{id}` | Partially update a book |
//! | `DELETE` | `/{id}` | Delete a book |
//! | `GET` | `/stats/summary` | Total / available / unavailable counts |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookshelf_types::{Book, BookId, BookPatch, BookStats, NewBook};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /hello
// ---------------------------------------------------------------------------

/// Confirm the API is up. Always succeeds.
pub async fn hello() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Hello from BookAPI!",
        "status": "API is running",
        "timestamp": chrono::Utc::now().timestamp_millis(),
    }))
}

// ---------------------------------------------------------------------------
// GET / -- list books
// ---------------------------------------------------------------------------

/// Return every book in insertion order.
pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    Json(state.store.list().await)
}

// ---------------------------------------------------------------------------
// GET /{id}
// ---------------------------------------------------------------------------

/// Return a single book, or 404 with the requested id.
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&raw_id)?;
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

// ---------------------------------------------------------------------------
// POST /
// ---------------------------------------------------------------------------

/// Create a book from a partial body. Missing fields are defaulted by the
/// store. Responds 201 with the stored record.
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(new) = payload?;
    let book = state.store.add(new).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

// ---------------------------------------------------------------------------
// PUT /{id}
// ---------------------------------------------------------------------------

/// Update the fields present in the body, leaving the rest untouched.
///
/// Despite the verb this is a partial update: keys left out of the body,
/// or sent as `null`, do not change the stored value.
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<BookPatch>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_book_id(&raw_id)?;
    let Json(patch) = payload?;

    if state.store.get(id).await.is_none() {
        return Err(ApiError::NotFound(id));
    }

    // The book may have been deleted between the two calls.
    state
        .store
        .update(id, patch)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

// ---------------------------------------------------------------------------
// DELETE /{id}
// ---------------------------------------------------------------------------

/// Delete a book. Repeating the call for the same id yields 404.
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_book_id(&raw_id)?;
    if !state.store.delete(id).await {
        return Err(ApiError::NotFound(id));
    }

    Ok(Json(serde_json::json!({
        "message": "Book deleted successfully",
        "id": id,
    })))
}

// ---------------------------------------------------------------------------
// GET /stats/summary
// ---------------------------------------------------------------------------

/// Return total, available, and unavailable book counts.
pub async fn stats_summary(State(state): State<Arc<AppState>>) -> Json<BookStats> {
    Json(state.store.stats().await)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a [`BookId`] from a path segment, returning an [`ApiError`] on
/// failure.
fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    raw.parse::<BookId>().map_err(|e| {
        debug!(raw, "Rejected book id");
        ApiError::InvalidId(e.to_string())
    })
}
