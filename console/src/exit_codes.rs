//! Stable exit codes for the menu programs.

/// The user chose the exit option or input ended.
pub const OK: i32 = 0;
/// Startup failed (bad config or arguments) or stdin/stdout broke mid-session.
pub const INVALID: i32 = 1;
