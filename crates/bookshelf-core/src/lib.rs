//! Core of the Bookshelf API: the in-memory book store and typed
//! configuration.
//!
//! # Modules
//!
//! - [`store`] -- [`BookStore`], the single owner of all book records
//!   and the id counter
//! - [`config`] -- YAML configuration with environment overrides

pub mod config;
pub mod store;

pub use config::{
    ApiConfig, BookshelfConfig, ConfigError, LogFormat, LoggingConfig, ServerSection, StoreConfig,
};
pub use store::{BookStore, StoreError, SystemYear, YearSource};
