//! Shared console plumbing for the interactive menu programs.
//!
//! Every program in the workspace is a numbered text menu over standard
//! input. The pieces they have in common live here:
//!
//! - **[`prompt`]**: token- and line-oriented reading with prompts echoed to
//!   the output stream.
//! - **[`menu`]**: the read-choice / dispatch / pause loop.
//! - **[`config`]**: optional TOML settings shared by all binaries.
//! - **[`args`]**: command-line flags every binary accepts.
//! - **[`logging`]**: `RUST_LOG`-driven diagnostics on stderr.
//!
//! Nothing in this crate knows about records or matrices; the programs plug
//! their own [`menu::Menu`] implementation into [`menu::run_menu`].

pub mod args;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod menu;
pub mod prompt;
