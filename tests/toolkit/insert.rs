//! Integration tests for insertion and update operations

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use mapkit::prelude::*;
use mapkit::{DEFAULT_INCREMENT_SEED, ErrorKind};

// =============================================================================
// Conditional inserts
// =============================================================================

#[test]
fn try_add_then_default_lookup() {
    let mut m: HashMap<String, i32> = HashMap::new();
    assert!(m.try_add("k".into(), 1));
    assert!(!m.try_add("k".into(), 2));
    assert_eq!(m.get_value_or_default(&"k".into(), 0), 1);
}

#[test]
fn add_if_not_exists_never_overwrites() {
    let mut m: BTreeMap<&str, &str> = BTreeMap::new();
    m.add_if_not_exists("lang", "rust");
    m.add_if_not_exists("lang", "other");
    assert_eq!(m.get_value_or_default(&"lang", "none"), "rust");
}

#[test]
fn strict_add_on_persistent_map() {
    let mut m: im::HashMap<u32, &str> = im::HashMap::new();
    m.add(1, "one").unwrap();
    let err = m.add(1, "uno").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateKey { ref key } if key == "1"));
}

// =============================================================================
// Ranges
// =============================================================================

#[test]
fn add_range_into_empty_map() {
    let mut m: IndexMap<&str, i32> = IndexMap::new();
    m.add_range([("a", 1), ("b", 2)]).unwrap();
    assert_eq!(m.to_list(), vec![("a", 1), ("b", 2)]);
}

#[test]
fn add_range_duplicate_within_input() {
    let mut m: IndexMap<&str, i32> = IndexMap::new();
    let err = m.add_range([("a", 1), ("a", 2), ("b", 3)]).unwrap_err();
    assert!(err.is_duplicate_key());
    assert_eq!(m.to_list(), vec![("a", 1)]);
}

// =============================================================================
// Factories and counters
// =============================================================================

#[test]
fn get_or_add_with_skips_factory_for_present_key() {
    let mut m: HashMap<&str, Vec<i32>> = HashMap::new();
    m.insert("k", vec![1]);
    let v = m.get_or_add_with("k", || panic!("factory must not run"));
    assert_eq!(v, vec![1]);
}

#[test]
fn increment_documented_sequence() {
    let mut m: HashMap<&str, i64> = HashMap::new();
    m.increment_or_seed("x", 5);
    m.increment_or_seed("x", 5);
    m.increment_or_seed("x", 5);
    assert_eq!(m["x"], 7);
}

#[test]
fn increment_uses_default_seed() {
    let mut m: HashMap<&str, i64> = HashMap::new();
    assert_eq!(m.increment("first"), DEFAULT_INCREMENT_SEED);
}

#[test]
fn word_count() {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in "the cat and the hat and the bat".split_whitespace() {
        counts.increment(word);
    }
    assert_eq!(
        counts.to_list(),
        vec![("the", 3), ("cat", 1), ("and", 2), ("hat", 1), ("bat", 1)]
    );
}

// =============================================================================
// Merge
// =============================================================================

#[test]
fn merge_across_container_types() {
    let mut target: IndexMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let source: BTreeMap<&str, i32> = [("b", 20), ("c", 30)].into_iter().collect();
    target.merge(&source);
    assert_eq!(target.to_list(), vec![("a", 1), ("b", 20), ("c", 30)]);
    assert_eq!(source.len(), 2);
}
