//! Integration tests for shadowing lookups

use std::collections::HashMap;

use cascade_foundation::shared;
use cascade_map::{LayeredMap, Origin};

fn layer(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn key(k: &str) -> String {
    k.to_string()
}

#[test]
fn primary_beats_every_layer() {
    let mut map = LayeredMap::new();
    map.set(key("port"), key("9000"));
    map.attach(shared(layer(&[("port", "8080")])));
    map.attach(shared(layer(&[("port", "80")])));

    assert_eq!(map.get(&key("port")).unwrap(), "9000");
    assert_eq!(map.origin(&key("port")), Some(Origin::Primary));
}

#[test]
fn lower_index_beats_higher() {
    let mut map: LayeredMap<String, String> = LayeredMap::new();
    map.attach(shared(layer(&[("host", "user.example")])));
    map.attach(shared(layer(&[("host", "default.example"), ("tls", "off")])));

    assert_eq!(map.get(&key("host")).unwrap(), "user.example");
    assert_eq!(map.get(&key("tls")).unwrap(), "off");
    assert_eq!(map.origin(&key("tls")), Some(Origin::Layer(1)));
}

#[test]
fn missing_everywhere_is_key_not_found() {
    let mut map: LayeredMap<String, String> = LayeredMap::new();
    map.attach(shared(layer(&[("a", "1")])));

    let err = map.get(&key("zzz")).unwrap_err();
    assert!(err.is_key_not_found());
    assert!(map.try_get(&key("zzz")).is_none());
    assert!(!map.contains_key(&key("zzz")));
}

#[test]
fn three_layers_over_empty_primary() {
    let mut map: LayeredMap<String, String> = LayeredMap::new();
    map.attach(shared(layer(&[("a", "1"), ("b", "2"), ("c", "3")])));
    map.attach(shared(layer(&[("b", "22"), ("c", "33"), ("d", "44")])));
    map.attach(shared(layer(&[("c", "333"), ("d", "444"), ("e", "555")])));

    assert_eq!(map.get(&key("a")).unwrap(), "1");
    assert_eq!(map.get(&key("d")).unwrap(), "44");
    assert_eq!(map.get(&key("e")).unwrap(), "555");
    assert!(map.contains_key(&key("b")));
    assert!(!map.contains_key(&key("z")));
}

#[test]
fn lookups_see_current_layer_state() {
    // No memoization: a layer rebuilt and swapped in is seen on the next read.
    let mut map: LayeredMap<String, String> = LayeredMap::new();
    map.attach(shared(layer(&[("mode", "fast")])));
    assert_eq!(map.get(&key("mode")).unwrap(), "fast");

    map.detach(0);
    map.attach_at(shared(layer(&[("mode", "safe")])), 0);
    assert_eq!(map.get(&key("mode")).unwrap(), "safe");
}

#[test]
fn index_reads_through_layers() {
    let mut map: LayeredMap<String, String> = LayeredMap::new();
    map.attach(shared(layer(&[("a", "1")])));
    assert_eq!(map[&key("a")], "1");
}
