//! The reference three-layer scenario, step by step.

use std::collections::HashMap;
use std::sync::Arc;

use cascade::foundation::ErrorKind;
use cascade::map::LayeredMap;

fn owned(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn reference_walkthrough() {
    let user = Arc::new(owned(&[("b", "22"), ("c", "33"), ("d", "44")]));
    let defaults = Arc::new(owned(&[("c", "333"), ("d", "444"), ("e", "555")]));

    let mut map: LayeredMap<String, String> = owned(&[("a", "1"), ("b", "2"), ("c", "3")])
        .into_iter()
        .collect();
    map.attach(user.clone());
    map.attach(defaults.clone());

    for (key, expected) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "44"), ("e", "555")] {
        assert_eq!(map.get(&s(key)).unwrap(), expected, "key {key}");
    }
    assert_eq!(map.len(), 9);

    // "a" only ever lived in the primary layer
    assert!(map.remove(&s("a")));
    let err = map.get(&s("a")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::KeyNotFound { searched: 3, .. }));

    map.insert(s("f"), s("66")).unwrap();
    assert_eq!(map.get(&s("f")).unwrap(), "66");
    assert!(map.remove(&s("f")));
    assert!(!map.contains_key(&s("f")));

    map.attach_at(Arc::new(owned(&[("g", "77")])), 0);
    assert_eq!(map.get(&s("g")).unwrap(), "77");
    map.detach(0);
    assert!(!map.contains_key(&s("g")));

    map.clear_layers();
    assert_eq!(map.layer_count(), 0);

    // Detaching never touched the shared layers
    assert_eq!(user.len(), 3);
    assert_eq!(defaults.get("e").map(String::as_str), Some("555"));
    assert_eq!(Arc::strong_count(&user), 1);
}

#[test]
fn remove_reexposes_first_layer_holding_key() {
    let mut map: LayeredMap<String, String> = LayeredMap::new();
    map.set(s("c"), s("3"));
    map.attach(Arc::new(owned(&[("c", "33")])));
    map.attach(Arc::new(owned(&[("c", "333")])));

    assert!(map.remove(&s("c")));
    assert_eq!(map.get(&s("c")).unwrap(), "33");
}
