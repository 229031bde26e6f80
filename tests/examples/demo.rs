//! The demo driver's walkthrough.

use cascade::runtime::{DemoConfig, fixture, run_walkthrough};

#[test]
fn walkthrough_prints_expected_values() {
    let mut out = Vec::new();
    run_walkthrough(&mut out, &DemoConfig::quiet()).unwrap();
    let output = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(&lines[..5], &["a = 1", "b = 2", "c = 3", "d = 44", "e = 555"]);
    assert!(lines.contains(&"contains f: false"));
    assert!(lines.contains(&"contains g: false"));
    assert_eq!(lines.last(), Some(&"layers: 0"));
}

#[test]
fn verbose_preset_shows_origins() {
    let mut out = Vec::new();
    run_walkthrough(&mut out, &DemoConfig::verbose()).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("# resolved values"));
    assert!(output.contains("d = 44  (layer 0)"));
}

#[test]
fn fixture_matches_walkthrough_start() {
    let map = fixture();
    assert_eq!(map.layer_count(), 2);
    assert_eq!(map.primary().len(), 3);
    assert_eq!(map.keys().len(), 5);
}
