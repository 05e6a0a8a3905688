//! Outcomes of record-table operations that leave the table unchanged.

use thiserror::Error;

/// A non-fatal table failure. No mutation happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("table is full ({capacity} records)")]
    TableFull { capacity: usize },
    #[error("table is empty")]
    Empty,
    #[error("no matching record")]
    NotFound,
    /// Book id outside `1..=len`.
    #[error("invalid id {id}")]
    InvalidId { id: i64 },
    #[error("no copies available to issue")]
    NoCopiesAvailable,
    #[error("all copies are already present")]
    AllCopiesPresent,
}
