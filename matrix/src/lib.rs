//! Dense integer matrices behind a console menu.
//!
//! - **[`core`]**: the bounded [`core::Matrix`] type and the five
//!   operations (add, subtract, multiply, transpose, symmetry check). Pure,
//!   no I/O.
//! - **[`shell`]**: the `matrix-ops` menu that reads grids element by
//!   element and prints results.

pub mod core;
pub mod error;
pub mod shell;
