//! Whole-table behavior of the roster and catalog at default capacity.

use records::core::book::Catalog;
use records::core::student::Roster;
use records::core::table::DEFAULT_CAPACITY;
use records::error::RecordError;
use records::test_support::{catalog_of, new_book, roster_of, student};

#[test]
fn roster_round_trips_until_capacity() {
    let mut roster = Roster::default();
    for roll in 0..DEFAULT_CAPACITY as i64 {
        let added = roster
            .add(student(roll, &format!("s{roll}"), roll as f64))
            .expect("room")
            .clone();
        assert_eq!(roster.find(roll), Ok(&added));
    }
    let before = roster.clone();
    assert_eq!(
        roster.add(student(-1, "late", 0.0)),
        Err(RecordError::TableFull {
            capacity: DEFAULT_CAPACITY
        })
    );
    assert_eq!(roster, before);
}

#[test]
fn deleting_each_roll_in_turn_keeps_survivors_in_order() {
    let mut roster = roster_of((1..=6).map(|r| student(r, "x", r as f64)).collect());
    for (deleted, roll) in [4, 1, 6].into_iter().enumerate() {
        let len = roster.len();
        roster.delete(roll).expect("delete");
        assert_eq!(roster.len(), len - 1);
        assert_eq!(roster.find(roll), Err(RecordError::NotFound));
        assert_eq!(roster.len(), 5 - deleted);
    }
    let rolls: Vec<i64> = roster.list().expect("list").iter().map(|s| s.roll).collect();
    assert_eq!(rolls, vec![2, 3, 5]);
}

#[test]
fn catalog_fills_to_capacity_with_dense_ids() {
    let mut catalog = Catalog::default();
    for n in 0..DEFAULT_CAPACITY {
        let book = catalog.add(new_book(&format!("b{n}"), 1)).expect("room");
        assert_eq!(book.id, n + 1);
    }
    assert!(catalog.is_full());
    assert_eq!(
        catalog.add(new_book("late", 1)),
        Err(RecordError::TableFull {
            capacity: DEFAULT_CAPACITY
        })
    );
}

#[test]
fn ids_stay_dense_after_interleaved_removals() {
    let mut catalog = catalog_of(&[("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1)]);
    catalog.remove(5).expect("remove last");
    catalog.remove(1).expect("remove first");
    catalog.add(new_book("f", 1)).expect("add");
    catalog.remove(2).expect("remove middle");
    let books = catalog.list().expect("list");
    let ids: Vec<usize> = books.iter().map(|b| b.id).collect();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(titles, vec!["b", "d", "f"]);
}
