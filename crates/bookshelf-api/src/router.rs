//! Axum router construction for the HTTP API.
//!
//! Assembles all book routes under the configured base path into a single
//! [`Router`] with request tracing and, when enabled, permissive CORS.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use bookshelf_core::ApiConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// With the default base path `/api/books` the router includes:
/// - `GET /api/books/hello` -- liveness acknowledgment
/// - `GET /api/books` -- list books
/// - `POST /api/books` -- create a book
/// - `GET /api/books/{id}` -- single book
/// - `PUT /api/books/{id}` -- partial update
/// - `DELETE /api/books/{id}` -- delete
/// - `GET /api/books/stats/summary` -- counts
pub fn build_router(state: Arc<AppState>, api: &ApiConfig) -> Router {
    let base = api.base_path.as_str();
    let collection = if base.is_empty() { "/" } else { base };

    let router = Router::new()
        .route(&format!("{base}/hello"), get(handlers::hello))
        .route(
            collection,
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(&format!("{base}/stats/summary"), get(handlers::stats_summary))
        .route(
            &format!("{base}/{{id}}"),
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        );

    let router = if api.cors_permissive {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
