//! Integration tests for the Mapping trait
//!
//! The same contract is checked against every supported container.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use mapkit::{Mapping, ReadOnlyView};

fn fill<M: Mapping<Key = String, Value = i64> + Default>() -> M {
    let mut m = M::default();
    for (i, name) in ["delta", "alpha", "charlie", "bravo"].iter().enumerate() {
        m.insert((*name).to_string(), i64::try_from(i).unwrap());
    }
    m
}

fn check_contract<M: Mapping<Key = String, Value = i64> + Default>() {
    let mut m: M = fill();
    assert_eq!(m.len(), 4);
    assert!(!m.is_empty());
    assert_eq!(m.get(&"alpha".to_string()), Some(&1));
    assert_eq!(m.insert("alpha".to_string(), 10), Some(1));
    assert_eq!(m.len(), 4);
    assert_eq!(m.remove(&"delta".to_string()), Some(0));
    assert_eq!(m.remove(&"delta".to_string()), None);
    assert_eq!(m.iter().count(), 3);
}

// =============================================================================
// Contract across containers
// =============================================================================

#[test]
fn hash_map_contract() {
    check_contract::<HashMap<String, i64>>();
}

#[test]
fn btree_map_contract() {
    check_contract::<BTreeMap<String, i64>>();
}

#[test]
fn index_map_contract() {
    check_contract::<IndexMap<String, i64>>();
}

#[test]
fn im_hash_map_contract() {
    check_contract::<im::HashMap<String, i64>>();
}

#[test]
fn im_ord_map_contract() {
    check_contract::<im::OrdMap<String, i64>>();
}

// =============================================================================
// Iteration order
// =============================================================================

#[test]
fn index_map_keeps_insertion_order() {
    let m: IndexMap<String, i64> = fill();
    let keys: Vec<_> = Mapping::iter(&m).map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["delta", "alpha", "charlie", "bravo"]);
}

#[test]
fn ordered_maps_iterate_by_key() {
    let btree: BTreeMap<String, i64> = fill();
    let ord: im::OrdMap<String, i64> = fill();
    let a: Vec<_> = Mapping::iter(&btree).map(|(k, _)| k.clone()).collect();
    let b: Vec<_> = Mapping::iter(&ord).map(|(k, _)| k.clone()).collect();
    assert_eq!(a, vec!["alpha", "bravo", "charlie", "delta"]);
    assert_eq!(a, b);
}

// =============================================================================
// Read-only views
// =============================================================================

#[test]
fn view_over_persistent_map() {
    let m: im::HashMap<String, i64> = fill();
    let view = ReadOnlyView::new(&m);
    assert_eq!(view.len(), 4);
    assert_eq!(view.get(&"bravo".to_string()), Some(&3));
    let sum: i64 = view.values().sum();
    assert_eq!(sum, 6);
}
