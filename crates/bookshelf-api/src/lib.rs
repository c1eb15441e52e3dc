//! HTTP API for the Bookshelf book store.
//!
//! This crate provides an Axum router that exposes CRUD endpoints over
//! the in-memory [`BookStore`](bookshelf_core::BookStore) plus a summary
//! statistics endpoint, all mounted under a configurable base path
//! (`/api/books` by default).
//!
//! # Architecture
//!
//! Handlers hold no state of their own. Each request extracts the shared
//! [`AppState`], delegates to the store, and turns the result into a JSON
//! response and status code. The only domain error surfaced to clients
//! is "book not found" (404); malformed ids and bodies are rejected at
//! the boundary with 4xx responses.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
