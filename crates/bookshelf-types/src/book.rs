//! The book record and the payloads that create, patch, and summarize it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::ids::BookId;

// ---------------------------------------------------------------------------
// Book
// ---------------------------------------------------------------------------

/// A book as stored and returned by the API.
///
/// `title` and `author` are free text and may be missing entirely; no
/// field is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Book {
    /// Unique, immutable identifier.
    pub id: BookId,
    /// Book title.
    pub title: Option<String>,
    /// Book author.
    pub author: Option<String>,
    /// Publication year.
    pub year: i32,
    /// Whether the book can currently be borrowed.
    pub available: bool,
}

impl Book {
    /// Overwrite every field that is [`Field::Set`] in `patch`.
    ///
    /// Absent and null fields leave the stored value untouched. The id is
    /// never changed.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Field::Set(title) = patch.title {
            self.title = Some(title);
        }
        if let Field::Set(author) = patch.author {
            self.author = Some(author);
        }
        if let Field::Set(year) = patch.year {
            self.year = year;
        }
        if let Field::Set(available) = patch.available {
            self.available = available;
        }
    }
}

// ---------------------------------------------------------------------------
// NewBook -- POST body
// ---------------------------------------------------------------------------

/// Request body for creating a book.
///
/// Every field is optional. The store assigns an id when none is given,
/// defaults `year` to the current calendar year and `available` to `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct NewBook {
    /// Caller-chosen id. Usually omitted.
    pub id: Option<BookId>,
    /// Book title.
    pub title: Option<String>,
    /// Book author.
    pub author: Option<String>,
    /// Publication year.
    pub year: Option<i32>,
    /// Availability flag.
    pub available: Option<bool>,
}

impl NewBook {
    /// A new book with only title and author set.
    pub fn titled(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Field / BookPatch -- PUT body
// ---------------------------------------------------------------------------

/// One field of a partial update.
///
/// Distinguishes a key that was left out of the request from one that was
/// sent as an explicit `null`. Use with `#[serde(default)]` so missing keys
/// deserialize as [`Field::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The key was not present.
    Absent,
    /// The key was present with value `null`.
    Null,
    /// The key was present with a value.
    Set(T),
}

impl<T> Field<T> {
    /// Whether the key was left out of the request.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The carried value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Set))
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

/// Request body for updating a book.
///
/// Although exposed under `PUT`, the update is partial: only fields that
/// carry a value are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookPatch {
    /// New title.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub title: Field<String>,
    /// New author.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub author: Field<String>,
    /// New publication year.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub year: Field<i32>,
    /// New availability flag.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub available: Field<bool>,
}

// ---------------------------------------------------------------------------
// BookStats
// ---------------------------------------------------------------------------

/// Summary counts served by `GET /books/stats/summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BookStats {
    /// Number of stored books.
    pub total_books: usize,
    /// Books with `available == true`.
    pub available_books: usize,
    /// `total_books - available_books`.
    pub unavailable_books: usize,
}

impl BookStats {
    /// Build the summary from a total and an available count.
    pub const fn from_counts(total_books: usize, available_books: usize) -> Self {
        Self {
            total_books,
            available_books,
            unavailable_books: total_books.saturating_sub(available_books),
        }
    }
}
