//! Book catalog: records keyed by a position-derived id.
//!
//! A book's id is always its 1-based position in the catalog. Removing a
//! book renumbers every book after it, so ids are not stable across
//! removals. Issue, return and remove index the table directly by id and
//! rely on that numbering.

use tracing::debug;

use crate::core::fit_text;
use crate::core::table::Table;
use crate::error::RecordError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Position in the catalog plus one.
    pub id: usize,
    pub title: String,
    pub author: String,
    pub total_copies: u32,
    /// Always within `0..=total_copies`.
    pub available_copies: u32,
}

impl Book {
    /// Lend one copy out.
    pub fn issue(&mut self) -> Result<(), RecordError> {
        if self.available_copies == 0 {
            return Err(RecordError::NoCopiesAvailable);
        }
        self.available_copies -= 1;
        Ok(())
    }

    /// Take one copy back.
    pub fn give_back(&mut self) -> Result<(), RecordError> {
        if self.available_copies >= self.total_copies {
            return Err(RecordError::AllCopiesPresent);
        }
        self.available_copies += 1;
        Ok(())
    }
}

/// Fields supplied when adding a book. The catalog assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    /// Negative counts are clamped to zero.
    pub total_copies: i64,
}

/// Bounded table of books with ids kept equal to position + 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    table: Table<Book>,
}

impl Catalog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Table::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    /// Append a book with the next id and every copy available.
    pub fn add(&mut self, new: NewBook) -> Result<&Book, RecordError> {
        let total_copies = u32::try_from(new.total_copies.max(0)).unwrap_or(u32::MAX);
        let book = Book {
            id: self.table.len() + 1,
            title: fit_text(new.title),
            author: fit_text(new.author),
            total_copies,
            available_copies: total_copies,
        };
        debug!(id = book.id, total_copies, "adding book");
        self.table.push(book)
    }

    pub fn list(&self) -> Result<&[Book], RecordError> {
        self.table.list()
    }

    /// Every book whose title contains `text` (case-sensitive), in catalog
    /// order. An empty `text` matches every book.
    pub fn search_title(&self, text: &str) -> Result<Vec<&Book>, RecordError> {
        let matches: Vec<&Book> = self
            .table
            .iter()
            .filter(|book| book.title.contains(text))
            .collect();
        if matches.is_empty() {
            return Err(RecordError::NotFound);
        }
        Ok(matches)
    }

    pub fn get(&self, id: i64) -> Result<&Book, RecordError> {
        let index = self.slot(id)?;
        self.table.get(index).ok_or(RecordError::InvalidId { id })
    }

    /// Lend one copy of book `id`.
    pub fn issue(&mut self, id: i64) -> Result<&Book, RecordError> {
        let book = self.book_mut(id)?;
        book.issue()?;
        debug!(id, available = book.available_copies, "book issued");
        Ok(&*book)
    }

    /// Take back one copy of book `id`.
    pub fn return_copy(&mut self, id: i64) -> Result<&Book, RecordError> {
        let book = self.book_mut(id)?;
        book.give_back()?;
        debug!(id, available = book.available_copies, "book returned");
        Ok(&*book)
    }

    /// Remove book `id` and renumber every later book to its new position.
    pub fn remove(&mut self, id: i64) -> Result<Book, RecordError> {
        let index = self.slot(id)?;
        let removed = self.table.remove(index).ok_or(RecordError::InvalidId { id })?;
        for (position, book) in self.table.as_mut_slice().iter_mut().enumerate().skip(index) {
            book.id = position + 1;
        }
        debug!(id, remaining = self.table.len(), "book removed");
        Ok(removed)
    }

    fn book_mut(&mut self, id: i64) -> Result<&mut Book, RecordError> {
        let index = self.slot(id)?;
        self.table.get_mut(index).ok_or(RecordError::InvalidId { id })
    }

    /// Table index for `id`, which must lie in `1..=len`.
    fn slot(&self, id: i64) -> Result<usize, RecordError> {
        match usize::try_from(id) {
            Ok(n) if (1..=self.table.len()).contains(&n) => Ok(n - 1),
            _ => Err(RecordError::InvalidId { id }),
        }
    }
}
