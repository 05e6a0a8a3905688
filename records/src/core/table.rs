//! Capacity-bounded, insertion-ordered record storage.

use crate::error::RecordError;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// An ordered sequence of records that never grows past `capacity`.
///
/// Lookups are linear scans from the front, so the first match wins.
/// Removal shifts every later record one place forward.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    records: Vec<R>,
    capacity: usize,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<R> Table<R> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Append `record`, or report `TableFull` without touching the table.
    pub fn push(&mut self, record: R) -> Result<&R, RecordError> {
        if self.is_full() {
            return Err(RecordError::TableFull {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// All records in table order, or `Empty`.
    pub fn list(&self) -> Result<&[R], RecordError> {
        if self.records.is_empty() {
            return Err(RecordError::Empty);
        }
        Ok(&self.records)
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Mutable view for in-place reordering. Length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [R] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.records.get_mut(index)
    }

    /// Index of the first record matching `predicate`.
    pub fn position<P: FnMut(&R) -> bool>(&self, predicate: P) -> Option<usize> {
        self.records.iter().position(predicate)
    }

    /// Remove the record at `index`, closing the gap. Later records keep
    /// their relative order.
    pub fn remove(&mut self, index: usize) -> Option<R> {
        if index >= self.records.len() {
            return None;
        }
        Some(self.records.remove(index))
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
