//! Type-safe identifier wrapper for books.
//!
//! Book ids are plain integers on the wire (`{"id": 3}`) and in URL path
//! segments (`/api/books/3`). The newtype keeps them from being mixed
//! up with years or counts at compile time.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a book.
///
/// Assigned by the store from a monotonic counter and never reused
/// within a process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct BookId(#[ts(type = "number")] pub i64);

impl BookId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BookId> for i64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

/// Error returned when a string is not a valid [`BookId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid book id {input:?}: {source}")]
pub struct ParseBookIdError {
    /// The rejected input.
    pub input: String,
    /// The underlying integer parse failure.
    pub source: core::num::ParseIntError,
}

impl FromStr for BookId {
    type Err = ParseBookIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|source| ParseBookIdError {
                input: s.to_owned(),
                source,
            })
    }
}
