//! Console menus for the record tables.
//!
//! Each menu owns its table and turns core results into the program's fixed
//! messages. Prompting and the menu loop itself come from `console`.

pub mod library;
pub mod students;

pub use library::LibraryMenu;
pub use students::StudentMenu;
