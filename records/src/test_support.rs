//! Test-only helpers for building rosters and catalogs.

use crate::core::book::{Catalog, NewBook};
use crate::core::student::{Roster, Student};

/// Create a student with the given fields.
pub fn student(roll: i64, name: &str, marks: f64) -> Student {
    Student::new(roll, name, marks)
}

/// Create a default-capacity roster holding `students` in order.
pub fn roster_of(students: Vec<Student>) -> Roster {
    let mut roster = Roster::default();
    for s in students {
        roster.add(s).expect("roster has room");
    }
    roster
}

/// Describe a book to add, with `"<title> author"` as the author.
pub fn new_book(title: &str, total_copies: i64) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: format!("{title} author"),
        total_copies,
    }
}

/// Create a default-capacity catalog from `(title, total_copies)` pairs.
pub fn catalog_of(books: &[(&str, i64)]) -> Catalog {
    let mut catalog = Catalog::default();
    for (title, total) in books {
        catalog.add(new_book(title, *total)).expect("catalog has room");
    }
    catalog
}
