//! Deterministic record-table logic.
//!
//! Core modules must be free of I/O side effects. The shells own prompting
//! and printing; everything here operates on in-memory tables and returns
//! [`RecordError`](crate::error::RecordError) for the non-fatal failures.

pub mod book;
pub mod student;
pub mod table;

/// Longest name, title or author kept, in characters.
pub const MAX_TEXT_LEN: usize = 49;

/// Truncate `text` to [`MAX_TEXT_LEN`] characters.
pub fn fit_text(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(MAX_TEXT_LEN) {
        text.truncate(cut);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_text("Ada".to_string()), "Ada");
    }

    #[test]
    fn long_text_is_cut_on_a_char_boundary() {
        let long = "é".repeat(MAX_TEXT_LEN + 5);
        let fitted = fit_text(long);
        assert_eq!(fitted.chars().count(), MAX_TEXT_LEN);
    }
}
