//! PresenceMap invariants

use crate::common::init_tracing;
use presence::PresenceMap;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn from_map_preserves_entries(source in prop::collection::hash_map(any::<u16>(), any::<i64>(), 0..32)) {
        let map = PresenceMap::from_map(source.clone());
        prop_assert_eq!(map.len(), source.len());
        for (k, v) in &source {
            prop_assert_eq!(map.maybe_get(k).extract(), Ok(v));
        }
    }

    #[test]
    fn get_or_add_grows_only_for_unset_keys(
        source in prop::collection::hash_map(0u8..16, any::<i32>(), 0..8),
        key in 0u8..16,
        alternative in any::<i32>(),
    ) {
        let mut map = PresenceMap::from_map(source.clone());
        let value = *map.get_or_add(key, alternative);
        match source.get(&key) {
            Some(existing) => {
                prop_assert_eq!(value, *existing);
                prop_assert_eq!(map.len(), source.len());
            }
            None => {
                prop_assert_eq!(value, alternative);
                prop_assert_eq!(map.len(), source.len() + 1);
            }
        }
    }
}

#[test]
fn maybe_get_on_unset_key_is_absent() {
    let map = PresenceMap::from([(1, "Adam"), (2, "Bob"), (3, "Claire")]);
    assert!(map.maybe_get(&222).is_absent());
    assert_eq!(map.maybe_get(&2).extract(), Ok(&"Bob"));
    assert_eq!(map.len(), 3);
}

#[test]
fn get_or_add_inserts_exactly_once() {
    init_tracing();
    let mut map: PresenceMap<String, Vec<u32>> = PresenceMap::new();
    map.get_or_add("a".to_string(), Vec::new()).push(1);
    map.get_or_add("a".to_string(), vec![99]).push(2);
    assert_eq!(map.len(), 1);
    assert_eq!(map.maybe_get("a").extract(), Ok(&vec![1, 2]));
}

#[test]
fn raw_map_is_recoverable() {
    let mut source = HashMap::new();
    source.insert('x', 1);
    let mut map = PresenceMap::from(source.clone());
    map.insert('y', 2);
    source.insert('y', 2);
    assert_eq!(HashMap::from(map), source);
}
