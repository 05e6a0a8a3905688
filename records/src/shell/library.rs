//! `library-catalog` menu.

use std::io::{BufRead, Write};

use console::menu::{Dispatch, Menu};
use console::prompt::{PromptError, Prompter};

use crate::core::book::{Book, Catalog, NewBook};
use crate::error::RecordError;

const BANNER: &str = "
===== Library Management Menu =====
1. Add new book
2. Display all books
3. Search book by title
4. Issue a book
5. Return a book
6. Remove a book
7. Exit
===================================";

/// Menu over an owned [`Catalog`].
#[derive(Debug, Default)]
pub struct LibraryMenu {
    catalog: Catalog,
}

impl LibraryMenu {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn add<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        if self.catalog.is_full() {
            return p.say("Library full. Cannot add more books.");
        }
        let title = p.read_line("Enter book title: ")?;
        let author = p.read_line("Enter author: ")?;
        let total_copies = p.read_int("Enter total copies: ")?;
        let new = NewBook {
            title,
            author,
            total_copies,
        };
        match self.catalog.add(new) {
            Ok(book) => p.say(format_args!("Book added successfully with ID {}.", book.id)),
            Err(err) => p.say(message(&err)),
        }
    }

    fn display<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        match self.catalog.list() {
            Ok(books) => print_books(p, books.iter()),
            Err(_) => p.say("No books in library."),
        }
    }

    fn search<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let text = p.read_line("Enter title to search: ")?;
        match self.catalog.search_title(&text) {
            Ok(books) => print_books(p, books),
            Err(_) => p.say(format_args!(
                "No book found with title containing \"{text}\"."
            )),
        }
    }

    fn issue<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let id = p.read_int("Enter book ID to issue: ")?;
        match self.catalog.issue(id) {
            Ok(book) => p.say(format_args!(
                "Book \"{}\" issued successfully. Remaining copies: {}",
                book.title, book.available_copies
            )),
            Err(err) => p.say(message(&err)),
        }
    }

    fn give_back<R: BufRead, W: Write>(
        &mut self,
        p: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        let id = p.read_int("Enter book ID to return: ")?;
        match self.catalog.return_copy(id) {
            Ok(book) => p.say(format_args!(
                "Book \"{}\" returned successfully. Available copies: {}",
                book.title, book.available_copies
            )),
            Err(err) => p.say(message(&err)),
        }
    }

    fn remove<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<(), PromptError> {
        let id = p.read_int("Enter book ID to remove: ")?;
        match self.catalog.remove(id) {
            Ok(_) => p.say("Book removed successfully."),
            Err(err) => p.say(message(&err)),
        }
    }
}

impl Menu for LibraryMenu {
    fn banner(&self) -> &str {
        BANNER
    }

    fn exit_choice(&self) -> i64 {
        7
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: i64,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Dispatch, PromptError> {
        match choice {
            1 => self.add(prompter)?,
            2 => self.display(prompter)?,
            3 => self.search(prompter)?,
            4 => self.issue(prompter)?,
            5 => self.give_back(prompter)?,
            6 => self.remove(prompter)?,
            _ => return Ok(Dispatch::Unknown),
        }
        Ok(Dispatch::Handled)
    }
}

fn message(err: &RecordError) -> &'static str {
    match err {
        RecordError::TableFull { .. } => "Library full. Cannot add more books.",
        RecordError::Empty => "No books in library.",
        RecordError::NotFound | RecordError::InvalidId { .. } => "Invalid ID.",
        RecordError::NoCopiesAvailable => "No available copies to issue.",
        RecordError::AllCopiesPresent => "All copies are already in library.",
    }
}

fn print_books<'a, R, W, I>(p: &mut Prompter<R, W>, books: I) -> Result<(), PromptError>
where
    R: BufRead,
    W: Write,
    I: IntoIterator<Item = &'a Book>,
{
    p.say(format_args!(
        "\n{:<5} {:<30} {:<20} {:<10} {:<10}",
        "ID", "Title", "Author", "Total", "Available"
    ))?;
    p.say("-".repeat(76))?;
    for book in books {
        p.say(format_args!(
            "{:<5} {:<30} {:<20} {:<10} {:<10}",
            book.id, book.title, book.author, book.total_copies, book.available_copies
        ))?;
    }
    Ok(())
}
