//! Bounded in-memory record tables behind two console menus.
//!
//! - **[`core`]**: the table itself plus the student roster and book catalog
//!   built on it. Pure and deterministic, no I/O.
//! - **[`shell`]**: menu implementations that prompt for fields, call the
//!   core, and print results in the programs' fixed formats.
//!
//! The `student-records` and `library-catalog` binaries wire a shell menu to
//! stdin/stdout.

pub mod core;
pub mod error;
pub mod shell;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
