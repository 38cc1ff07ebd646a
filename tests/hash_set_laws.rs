#![cfg(feature = "hash")]
//! Property-based tests for HashSet laws.
//!
//! These tests check that HashSet and its set operations satisfy the algebraic properties expected
//! of a set, for arbitrary contents.

use proptest::prelude::*;
use sets::collections::hash::HashSet;
use sets::collections::traits::Set;

fn set_strategy(max_len: usize) -> impl Strategy<Value = HashSet<i16>> {
    // A narrow element range makes overlapping sets likely.
    prop::collection::vec(-64_i16..64, 0..max_len).prop_map(|items| items.into_iter().collect())
}

// =============================================================================
// Insert-Contains Law
// Description: An inserted item is contained, and the length grows only for new items
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(mut set in set_strategy(50), item in -64_i16..64) {
        let was_present = set.contains(&item);
        let len_before = set.len();

        let inserted = set.insert(item);

        prop_assert!(set.contains(&item));
        prop_assert_eq!(inserted, !was_present);
        prop_assert_eq!(set.len(), len_before + usize::from(!was_present));
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed item is never contained afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(mut set in set_strategy(50), item in -64_i16..64) {
        set.remove(&item);
        prop_assert!(!set.contains(&item));
    }
}

// =============================================================================
// Length Law
// Description: The length equals the number of distinct items the set yields
// =============================================================================

proptest! {
    #[test]
    fn prop_len_matches_members(items in prop::collection::vec(any::<i16>(), 0..80)) {
        let set: HashSet<i16> = items.iter().copied().collect();

        let mut distinct = items.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let mut members = set.to_vec();
        members.sort_unstable();

        prop_assert_eq!(set.len(), distinct.len());
        prop_assert_eq!(members, distinct);
    }
}

// =============================================================================
// Idempotence Laws
// Description: S ∪ S = S and S ∩ S = S
// =============================================================================

proptest! {
    #[test]
    fn prop_union_intersection_idempotence_law(set in set_strategy(50)) {
        prop_assert_eq!(&set | &set, set.clone());
        prop_assert_eq!(&set & &set, set);
    }
}

// =============================================================================
// Commutativity Laws
// Description: A ∪ B = B ∪ A and A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_commutativity_law(a in set_strategy(30), b in set_strategy(30)) {
        prop_assert_eq!(&a | &b, &b | &a);
        prop_assert_eq!(&a & &b, &b & &a);
    }
}

// =============================================================================
// Union Associativity Law
// Description: (A ∪ B) ∪ C = A ∪ (B ∪ C)
// =============================================================================

proptest! {
    #[test]
    fn prop_union_associativity_law(
        a in set_strategy(20),
        b in set_strategy(20),
        c in set_strategy(20)
    ) {
        let left = &(&a | &b) | &c;
        let right = &a | &(&b | &c);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Subset Laws
// Description: A ⊆ A ∪ B, A ∩ B ⊆ A and A ∩ B ⊆ B
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_law(a in set_strategy(30), b in set_strategy(30)) {
        let union = &a | &b;
        let intersection = &a & &b;

        prop_assert!(a.is_subset(&union));
        prop_assert!(intersection.is_subset(&a));
        prop_assert!(intersection.is_subset(&b));
    }
}

// =============================================================================
// Difference Law
// Description: (A \ B) ∩ B = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_disjoint_law(a in set_strategy(30), b in set_strategy(30)) {
        let difference = &a - &b;

        prop_assert_eq!((&difference & &b).len(), 0);
        prop_assert!(difference.is_subset(&a));
    }
}

// =============================================================================
// Lazy View Law
// Description: Collecting a lazy view gives the same set as the matching operator
// =============================================================================

proptest! {
    #[test]
    fn prop_lazy_views_match_operators(a in set_strategy(30), b in set_strategy(30)) {
        prop_assert_eq!(a.union(&b).copied().collect::<HashSet<_>>(), &a | &b);
        prop_assert_eq!(a.intersection(&b).copied().collect::<HashSet<_>>(), &a & &b);
        prop_assert_eq!(a.difference(&b).copied().collect::<HashSet<_>>(), &a - &b);
        prop_assert_eq!(a.symmetric_difference(&b).copied().collect::<HashSet<_>>(), &a ^ &b);
        prop_assert_eq!(a.union(&b).count(), (&a | &b).len(), "A union yields each item once.");
    }
}

// =============================================================================
// Removal Law
// Description: Removing items in any order keeps every other item reachable
// =============================================================================

proptest! {
    #[test]
    fn prop_removal_keeps_others_reachable(
        items in prop::collection::vec(any::<u16>(), 0..200),
        removals in prop::collection::vec(any::<u16>(), 0..200)
    ) {
        let mut set: HashSet<u16> = items.iter().copied().collect();
        for item in &removals {
            set.remove(item);
        }

        for item in &items {
            prop_assert_eq!(set.contains(item), !removals.contains(item));
        }
    }
}
