//! Shared type definitions for the Bookshelf API.
//!
//! This crate is the single source of truth for the wire types used by
//! the store and the HTTP surface. Types flow downstream to `TypeScript`
//! via `ts-rs` for API clients.
//!
//! # Modules
//!
//! - [`ids`] -- Integer identifier wrapper for books
//! - [`book`] -- The book record, create/patch payloads, and stats

pub mod book;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use book::{Book, BookPatch, BookStats, Field, NewBook};
pub use ids::{BookId, ParseBookIdError};
