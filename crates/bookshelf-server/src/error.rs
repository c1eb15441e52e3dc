//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerBinError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: bookshelf_core::ConfigError,
    },

    /// The log filter could not be parsed.
    #[error("invalid log filter {filter:?}: {message}")]
    LogFilter {
        /// The rejected directive.
        filter: String,
        /// Parser explanation.
        message: String,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: bookshelf_api::ServerError,
    },
}
