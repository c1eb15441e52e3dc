//! In-memory book store.
//!
//! [`BookStore`] exclusively owns every [`Book`] record and the monotonic
//! id counter. Both live behind a single [`RwLock`], so concurrent
//! requests can never interleave two mutations or observe a half-applied
//! one. Reads return owned snapshots taken under the read lock.
//!
//! Lookups are linear scans over a `Vec`, which keeps insertion order for
//! [`BookStore::list`] and is plenty for the collection sizes involved.

use core::fmt;

use bookshelf_types::{Book, BookId, BookPatch, BookStats, NewBook};
use chrono::Datelike;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Errors that can occur when adding a book.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The caller supplied an id that belongs to a live book.
    #[error("book id {0} already exists")]
    DuplicateId(BookId),

    /// The id counter cannot advance any further.
    #[error("book id space exhausted")]
    IdSpaceExhausted,
}

/// Source of the calendar year used to default [`Book::year`].
pub trait YearSource: Send + Sync + fmt::Debug {
    /// The current calendar year.
    fn current_year(&self) -> i32;
}

/// [`YearSource`] backed by the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemYear;

impl YearSource for SystemYear {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// State guarded by the store lock.
#[derive(Debug, Default)]
struct Shelf {
    /// Records in insertion order.
    books: Vec<Book>,
    /// Highest id handed out or accepted so far. Never decreases.
    last_id: i64,
}

impl Shelf {
    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    fn count_available(&self) -> usize {
        self.books.iter().filter(|b| b.available).count()
    }
}

/// Owner of all book records and the id counter.
///
/// Share it behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct BookStore {
    shelf: RwLock<Shelf>,
    years: Box<dyn YearSource>,
}

impl BookStore {
    /// Create an empty store. The first generated id is 1.
    pub fn new() -> Self {
        Self::from_books(Vec::new())
    }

    /// Create a store preloaded with the three sample books (ids 1-3).
    pub fn with_samples() -> Self {
        Self::from_books(sample_books())
    }

    /// Create a store seeded with `books`.
    ///
    /// The id counter starts at the highest seeded id, so generated ids
    /// never collide with a seeded one.
    pub fn from_books(books: Vec<Book>) -> Self {
        let last_id = books.iter().map(|b| b.id.into_inner()).max().unwrap_or(0).max(0);
        Self {
            shelf: RwLock::new(Shelf { books, last_id }),
            years: Box::new(SystemYear),
        }
    }

    /// Replace the clock used to default the publication year.
    #[must_use]
    pub fn with_year_source(mut self, years: impl YearSource + 'static) -> Self {
        self.years = Box::new(years);
        self
    }

    /// Snapshot of all books in insertion order.
    pub async fn list(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    /// Look up a book by id.
    pub async fn get(&self, id: BookId) -> Option<Book> {
        let shelf = self.shelf.read().await;
        let found = shelf.books.iter().find(|b| b.id == id).cloned();
        if found.is_none() {
            debug!(%id, "Book not found");
        }
        found
    }

    /// Store a new book and return the stored record.
    ///
    /// Assigns the next id when `new.id` is unset, defaults `year` to the
    /// current year and `available` to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if `new.id` names a live book,
    /// or [`StoreError::IdSpaceExhausted`] if the counter would overflow.
    pub async fn add(&self, new: NewBook) -> Result<Book, StoreError> {
        let year = new.year.unwrap_or_else(|| self.years.current_year());

        let mut shelf = self.shelf.write().await;
        let id = match new.id {
            Some(id) => {
                if shelf.position(id).is_some() {
                    return Err(StoreError::DuplicateId(id));
                }
                shelf.last_id = shelf.last_id.max(id.into_inner());
                id
            }
            None => {
                let next = shelf
                    .last_id
                    .checked_add(1)
                    .ok_or(StoreError::IdSpaceExhausted)?;
                shelf.last_id = next;
                BookId(next)
            }
        };

        let book = Book {
            id,
            title: new.title,
            author: new.author,
            year,
            available: new.available.unwrap_or(true),
        };
        shelf.books.push(book.clone());
        info!(%id, total = shelf.books.len(), "Book added");
        Ok(book)
    }

    /// Apply a partial update to the book with `id`.
    ///
    /// Returns the updated record, or `None` if no such book exists.
    pub async fn update(&self, id: BookId, patch: BookPatch) -> Option<Book> {
        let mut shelf = self.shelf.write().await;
        let Some(book) = shelf.books.iter_mut().find(|b| b.id == id) else {
            debug!(%id, "Update target not found");
            return None;
        };
        book.apply(patch);
        info!(%id, "Book updated");
        Some(book.clone())
    }

    /// Remove the book with `id`. Returns whether a book was removed.
    ///
    /// The id is not reclaimed.
    pub async fn delete(&self, id: BookId) -> bool {
        let mut shelf = self.shelf.write().await;
        let Some(index) = shelf.position(id) else {
            debug!(%id, "Delete target not found");
            return false;
        };
        shelf.books.remove(index);
        info!(%id, total = shelf.books.len(), "Book deleted");
        true
    }

    /// Number of stored books.
    pub async fn count(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    /// Number of stored books marked available.
    pub async fn count_available(&self) -> usize {
        self.shelf.read().await.count_available()
    }

    /// Total, available, and unavailable counts from one consistent read.
    pub async fn stats(&self) -> BookStats {
        let shelf = self.shelf.read().await;
        BookStats::from_counts(shelf.books.len(), shelf.count_available())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The sample records a fresh server starts with.
fn sample_books() -> Vec<Book> {
    let book = |id: i64, title: &str, author: &str, year: i32, available: bool| Book {
        id: BookId(id),
        title: Some(title.to_owned()),
        author: Some(author.to_owned()),
        year,
        available,
    };
    vec![
        book(1, "Java Programming", "John Doe", 2022, true),
        book(2, "Spring Boot Guide", "Jane Smith", 2023, true),
        book(3, "Microservices Architecture", "Mike Johnson", 2021, false),
    ]
}
