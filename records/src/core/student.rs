//! Student roster: records keyed by a caller-supplied roll number.

use tracing::debug;

use crate::core::fit_text;
use crate::core::table::Table;
use crate::error::RecordError;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Lookup key. Not required to be unique; lookups take the first match.
    pub roll: i64,
    pub name: String,
    pub marks: f64,
}

impl Student {
    pub fn new(roll: i64, name: impl Into<String>, marks: f64) -> Self {
        Self {
            roll,
            name: fit_text(name.into()),
            marks,
        }
    }
}

/// Bounded table of students in insertion order (until sorted).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    table: Table<Student>,
}

impl Roster {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Table::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    pub fn add(&mut self, student: Student) -> Result<&Student, RecordError> {
        debug!(roll = student.roll, "adding student");
        self.table.push(student)
    }

    pub fn list(&self) -> Result<&[Student], RecordError> {
        self.table.list()
    }

    /// First student with `roll`, scanning front to back.
    pub fn find(&self, roll: i64) -> Result<&Student, RecordError> {
        let index = self.index_of(roll)?;
        Ok(&self.table.as_slice()[index])
    }

    /// Overwrite name and marks of the first student with `roll`.
    pub fn update(
        &mut self,
        roll: i64,
        name: impl Into<String>,
        marks: f64,
    ) -> Result<&Student, RecordError> {
        let index = self.index_of(roll)?;
        let student = self.table.get_mut(index).ok_or(RecordError::NotFound)?;
        student.name = fit_text(name.into());
        student.marks = marks;
        debug!(roll, index, "student updated");
        Ok(&*student)
    }

    /// Remove the first student with `roll`; later students move up one place.
    pub fn delete(&mut self, roll: i64) -> Result<Student, RecordError> {
        let index = self.index_of(roll)?;
        let removed = self.table.remove(index).ok_or(RecordError::NotFound)?;
        debug!(roll, index, remaining = self.table.len(), "student deleted");
        Ok(removed)
    }

    /// Reorder by marks, highest first. Students with equal marks keep their
    /// relative order.
    pub fn sort_by_marks_desc(&mut self) -> Result<(), RecordError> {
        if self.table.is_empty() {
            return Err(RecordError::Empty);
        }
        bubble_sort_by_marks_desc(self.table.as_mut_slice());
        Ok(())
    }

    fn index_of(&self, roll: i64) -> Result<usize, RecordError> {
        self.table
            .position(|student| student.roll == roll)
            .ok_or(RecordError::NotFound)
    }
}

/// Adjacent-swap sort: swap when the left mark is strictly lower, shrinking
/// the unsorted prefix each pass and stopping after a pass with no swap.
fn bubble_sort_by_marks_desc(students: &mut [Student]) {
    let mut unsorted = students.len();
    while unsorted > 1 {
        let mut swapped = false;
        for j in 0..unsorted - 1 {
            if students[j].marks < students[j + 1].marks {
                students.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        unsorted -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{roster_of, student};

    fn rolls(roster: &Roster) -> Vec<i64> {
        roster
            .list()
            .map(|students| students.iter().map(|s| s.roll).collect())
            .unwrap_or_default()
    }

    #[test]
    fn add_then_find_round_trips() {
        let mut roster = Roster::default();
        let added = roster.add(student(7, "Ada", 88.5)).expect("add").clone();
        assert_eq!(roster.find(7), Ok(&added));
    }

    #[test]
    fn add_past_capacity_reports_full_and_keeps_contents() {
        let mut roster = Roster::with_capacity(2);
        roster.add(student(1, "A", 1.0)).expect("add");
        roster.add(student(2, "B", 2.0)).expect("add");
        let before = roster.clone();
        assert_eq!(
            roster.add(student(3, "C", 3.0)),
            Err(RecordError::TableFull { capacity: 2 })
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn find_takes_first_duplicate_roll() {
        let roster = roster_of(vec![student(5, "First", 10.0), student(5, "Second", 20.0)]);
        assert_eq!(roster.find(5).expect("find").name, "First");
        assert_eq!(roster.find(6), Err(RecordError::NotFound));
    }

    #[test]
    fn update_overwrites_name_and_marks_in_place() {
        let mut roster = roster_of(vec![student(1, "A", 40.0), student(2, "B", 50.0)]);
        roster.update(2, "Bea", 75.25).expect("update");
        assert_eq!(roster.find(2), Ok(&student(2, "Bea", 75.25)));
        assert_eq!(rolls(&roster), vec![1, 2]);
        assert_eq!(roster.update(9, "X", 0.0), Err(RecordError::NotFound));
    }

    #[test]
    fn delete_compacts_and_preserves_order() {
        let mut roster = roster_of(vec![
            student(1, "A", 1.0),
            student(2, "B", 2.0),
            student(3, "C", 3.0),
            student(4, "D", 4.0),
        ]);
        let removed = roster.delete(2).expect("delete");
        assert_eq!(removed.name, "B");
        assert_eq!(roster.find(2), Err(RecordError::NotFound));
        assert_eq!(rolls(&roster), vec![1, 3, 4]);
        assert_eq!(roster.delete(2), Err(RecordError::NotFound));
    }

    #[test]
    fn sort_orders_by_marks_descending() {
        let mut roster = roster_of(vec![
            student(10, "A", 50.0),
            student(20, "B", 90.0),
            student(30, "C", 70.0),
        ]);
        roster.sort_by_marks_desc().expect("sort");
        assert_eq!(rolls(&roster), vec![20, 30, 10]);
    }

    #[test]
    fn sort_is_idempotent_and_stable_for_ties() {
        let mut roster = roster_of(vec![
            student(1, "A", 60.0),
            student(2, "B", 80.0),
            student(3, "C", 60.0),
            student(4, "D", 80.0),
            student(5, "E", 10.0),
        ]);
        roster.sort_by_marks_desc().expect("sort");
        let once = roster.clone();
        roster.sort_by_marks_desc().expect("sort again");
        assert_eq!(roster, once);
        assert_eq!(rolls(&roster), vec![2, 4, 1, 3, 5]);
        let marks: Vec<f64> = roster.list().expect("list").iter().map(|s| s.marks).collect();
        assert!(marks.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn sort_on_empty_roster_reports_empty() {
        let mut roster = Roster::default();
        assert_eq!(roster.sort_by_marks_desc(), Err(RecordError::Empty));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(80);
        let s = Student::new(1, long, 0.0);
        assert_eq!(s.name.len(), crate::core::MAX_TEXT_LEN);
    }
}
