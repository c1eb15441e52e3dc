//! Shared application state for the HTTP API.

use std::sync::Arc;

use bookshelf_core::BookStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// store serializes its own mutations, so the state itself needs no lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The book store every handler delegates to.
    pub store: Arc<BookStore>,
}

impl AppState {
    /// Create application state around an existing store.
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create application state sharing a store with the caller.
    pub const fn with_shared_store(store: Arc<BookStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    /// State backed by a store preloaded with the sample books.
    fn default() -> Self {
        Self::new(BookStore::with_samples())
    }
}
