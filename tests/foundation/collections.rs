//! Integration tests for persistent collections
//!
//! Tests LtSet and LtMap with structural sharing and in-place edits.

use cascade_foundation::collections::{LtMap, LtSet};

// =============================================================================
// LtSet
// =============================================================================

#[test]
fn set_empty() {
    let s: LtSet<String> = LtSet::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
}

#[test]
fn set_no_duplicates() {
    let s = LtSet::new().insert("a").insert("a");
    assert_eq!(s.len(), 1);
}

#[test]
fn set_immutability() {
    let s1 = LtSet::new().insert(1);
    let s2 = s1.insert(2);

    assert_eq!(s1.len(), 1);
    assert_eq!(s2.len(), 2);
}

#[test]
fn set_equality_ignores_order() {
    let s1: LtSet<i32> = [1, 2, 3].into_iter().collect();
    let s2: LtSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(s1, s2);
}

// =============================================================================
// LtMap
// =============================================================================

#[test]
fn map_empty() {
    let m: LtMap<String, i64> = LtMap::new();
    assert!(m.is_empty());
    assert_eq!(m.len(), 0);
}

#[test]
fn map_overwrite() {
    let m = LtMap::new().insert("a", 1).insert("a", 10);

    assert_eq!(m.len(), 1);
    assert_eq!(m.get(&"a"), Some(&10));
}

#[test]
fn map_persistent_remove() {
    let m = LtMap::new().insert("a", 1).insert("b", 2);
    let m2 = m.remove(&"a");

    assert!(m.get(&"a").is_some()); // original unchanged
    assert!(m2.get(&"a").is_none());
    assert_eq!(m2.len(), 1);
}

#[test]
fn map_set_and_take_in_place() {
    let mut m = LtMap::new();
    m.set("a", 1);
    m.set("b", 2);
    assert_eq!(m.set("a", 3), Some(1));
    assert_eq!(m.take(&"b"), Some(2));
    assert_eq!(m.len(), 1);
}

#[test]
fn map_keys_and_values() {
    let m: LtMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();

    let mut keys: Vec<_> = m.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b"]);

    let mut values: Vec<_> = m.values().copied().collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn map_borrowed_iteration() {
    let m: LtMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let mut total = 0;
    for (_, v) in &m {
        total += v;
    }
    assert_eq!(total, 3);
}

#[test]
fn map_equality_ignores_order() {
    let m1 = LtMap::new().insert("a", 1).insert("b", 2);
    let m2 = LtMap::new().insert("b", 2).insert("a", 1);
    let m3 = LtMap::new().insert("a", 1).insert("b", 3);

    assert_eq!(m1, m2);
    assert_ne!(m1, m3);
}

#[test]
fn large_map_clone_is_cheap() {
    let mut m = LtMap::new();
    for i in 0..10_000 {
        m.set(i, i * 2);
    }

    let mut m2 = m.clone();
    m2.set(0, -1);

    assert_eq!(m.get(&0), Some(&0));
    assert_eq!(m2.get(&5000), Some(&10_000));
}
