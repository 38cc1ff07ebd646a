#![cfg(feature = "hash")]
//! Example-based tests for HashSet, exercised only through the public API.

use rstest::rstest;
use sets::collections::hash::HashSet;
use sets::collections::traits::Set;

fn set_of(items: &[i32]) -> HashSet<i32> {
    items.iter().copied().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: HashSet<i32> = HashSet::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert!(set.to_vec().is_empty());
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: HashSet<String> = HashSet::default();
    assert!(set.is_empty());
}

// =============================================================================
// Insertion and membership
// =============================================================================

#[rstest]
fn test_insert_duplicate_does_not_increase_length() {
    let mut set = HashSet::<i32>::new();
    set.insert(1);
    set.insert(2);
    set.insert(2);

    assert_eq!(set.len(), 2);
    assert!(set.contains(&2));
    assert!(!set.contains(&3));
}

#[rstest]
#[case(&[], 0)]
#[case(&[7], 1)]
#[case(&[1, 1, 1, 1], 1)]
#[case(&[3, 1, 2, 3, 1], 3)]
fn test_len_counts_distinct_items(#[case] items: &[i32], #[case] expected: usize) {
    let set = set_of(items);
    assert_eq!(set.len(), expected);
    assert_eq!(set.iter().count(), expected);
    assert!(items.iter().all(|item| set.contains(item)));
}

#[rstest]
fn test_contains_with_borrow() {
    let set: HashSet<String> = ["apple", "pear"].iter().map(|s| s.to_string()).collect();
    assert!(set.contains("apple"));
    assert!(!set.contains("plum"));
}

#[rstest]
fn test_remove_present_and_absent() {
    let mut set = set_of(&[1, 2, 3]);

    assert!(set.remove(&2));
    assert!(!set.contains(&2));
    assert_eq!(set.len(), 2);

    assert!(!set.remove(&2));
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Set operations
// =============================================================================

#[rstest]
fn test_operations_on_overlapping_sets() {
    let a = set_of(&[1, 2, 3]);
    let b = set_of(&[2, 3, 4]);

    let union = &a | &b;
    let intersection = &a & &b;
    let difference = &a - &b;

    assert_eq!(union.len(), 4);
    assert_eq!(union, set_of(&[1, 2, 3, 4]));
    assert_eq!(intersection.len(), 2);
    assert_eq!(intersection, set_of(&[2, 3]));
    assert_eq!(difference.len(), 1);
    assert_eq!(difference, set_of(&[1]));
    assert!(!a.is_subset(&b));
}

#[rstest]
fn test_derived_sets_are_independent() {
    let a = set_of(&[1, 2]);
    let b = set_of(&[2, 3]);

    let mut union = &a | &b;
    union.insert(10);
    union.remove(&1);

    assert_eq!(a, set_of(&[1, 2]));
    assert_eq!(b, set_of(&[2, 3]));
}

#[rstest]
#[case(&[], &[], true)]
#[case(&[], &[1, 2], true)]
#[case(&[1], &[1, 2], true)]
#[case(&[1, 2], &[1, 2], true)]
#[case(&[1, 3], &[1, 2], false)]
#[case(&[1, 2, 3], &[1, 2], false)]
fn test_is_subset(#[case] items: &[i32], #[case] other: &[i32], #[case] expected: bool) {
    assert_eq!(set_of(items).is_subset(&set_of(other)), expected);
    assert_eq!(set_of(other).is_superset(&set_of(items)), expected);
}

#[rstest]
fn test_to_vec_contains_each_item_once() {
    let set = set_of(&[5, 3, 5, 9]);
    let mut items = set.to_vec();
    items.sort_unstable();
    assert_eq!(items, [3, 5, 9]);
}
