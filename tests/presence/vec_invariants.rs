//! PresenceVec invariants

use presence::PresenceVec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn maybe_at_matches_bounds(items in prop::collection::vec(any::<u8>(), 0..16), index in 0usize..32) {
        let seq = PresenceVec::from_vec(items.clone());
        prop_assert_eq!(seq.maybe_at(index).into_option(), items.get(index));
    }

    #[test]
    fn maybe_at_from_end_mirrors_reverse_indexing(
        items in prop::collection::vec(any::<u8>(), 0..16),
        offset in 0usize..20,
    ) {
        let seq = PresenceVec::from_vec(items.clone());
        let expected = offset.checked_sub(1).and_then(|back| items.iter().rev().nth(back));
        prop_assert_eq!(seq.maybe_at_from_end(offset).into_option(), expected);
    }

    #[test]
    fn from_vec_preserves_length_and_order(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let seq = PresenceVec::from_vec(items.clone());
        prop_assert_eq!(seq.len(), items.len());
        for (i, v) in items.iter().enumerate() {
            prop_assert_eq!(seq.maybe_at(i).extract(), Ok(v));
        }
    }

    #[test]
    fn maybe_pop_removes_last(items in prop::collection::vec(any::<i32>(), 0..16)) {
        let mut seq = PresenceVec::from_vec(items.clone());
        let mut expected = items;
        let popped = seq.maybe_pop();
        prop_assert_eq!(popped.into_option(), expected.pop());
        prop_assert_eq!(seq.into_vec(), expected);
    }

    #[test]
    fn maybe_shift_removes_first(items in prop::collection::vec(any::<i32>(), 0..16)) {
        let mut seq = PresenceVec::from_vec(items.clone());
        let shifted = seq.maybe_shift();
        prop_assert_eq!(shifted.into_option(), items.first().copied());
        prop_assert_eq!(seq.as_slice(), items.get(1..).unwrap_or(&[]));
    }

    #[test]
    fn index_searches_agree_with_lowest_match(
        items in prop::collection::vec(0u8..4, 0..16),
        needle in 0u8..4,
    ) {
        let seq = PresenceVec::from_vec(items.clone());
        let expected = items.iter().position(|v| *v == needle);
        prop_assert_eq!(seq.maybe_index_of(&needle).into_option(), expected);
        prop_assert_eq!(seq.maybe_find_index(|v| *v == needle).into_option(), expected);
        prop_assert_eq!(seq.maybe_find(|v| *v == needle).is_present(), expected.is_some());
    }
}

#[test]
fn empty_sequence_lookups_are_absent_and_non_destructive() {
    let mut seq: PresenceVec<&str> = PresenceVec::new();
    assert!(seq.maybe_at(0).is_absent());
    assert!(seq.maybe_pop().is_absent());
    assert!(seq.maybe_shift().is_absent());
    assert!(seq.is_empty());
}

#[test]
fn pop_on_one_two_three() {
    let mut seq = PresenceVec::from(vec![1, 2, 3]);
    assert_eq!(seq.maybe_pop().extract(), Ok(3));
    assert_eq!(seq.into_vec(), vec![1, 2]);
}

#[test]
fn shift_on_dog_cat() {
    let mut seq = PresenceVec::from(vec!["dog", "cat"]);
    assert_eq!(seq.maybe_shift().extract(), Ok("dog"));
    assert_eq!(seq.into_vec(), vec!["cat"]);
}

#[test]
fn searching_for_two() {
    let seq = PresenceVec::from(vec![1, 2, 3]);
    assert_eq!(seq.maybe_find_index(|v| *v == 2).extract(), Ok(1));
    assert_eq!(seq.maybe_index_of(&2).extract(), Ok(1));
    assert!(seq.maybe_find_index(|v| *v == 22).is_absent());
    assert!(seq.maybe_index_of(&22).is_absent());
}

#[test]
fn lookups_chain_into_combinators() {
    let seq = PresenceVec::from(vec!["lion", "tiger", "cat"]);
    let len = seq
        .maybe_index_of(&"tiger")
        .flat_transform(|i| seq.maybe_at(i))
        .transform(|name| name.len());
    assert_eq!(len.extract(), Ok(5));
}
