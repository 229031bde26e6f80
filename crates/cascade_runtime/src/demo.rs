//! Walkthrough of layered lookups.
//!
//! Builds a three-layer map (local overrides over user settings over
//! defaults) and narrates how reads, writes, and layer changes resolve.

use std::collections::HashMap;
use std::io::Write;

use cascade_foundation::shared;
use cascade_map::LayeredMap;
use tracing::info;

use crate::config::DemoConfig;
use crate::error::Result;

fn owned(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Builds the demo map.
///
/// Primary `{a:1, b:2, c:3}`, then `{b:22, c:33, d:44}`, then
/// `{c:333, d:444, e:555}`.
#[must_use]
pub fn fixture() -> LayeredMap<String, String> {
    let mut map: LayeredMap<String, String> = owned(&[("a", "1"), ("b", "2"), ("c", "3")])
        .into_iter()
        .collect();
    map.attach(shared(owned(&[("b", "22"), ("c", "33"), ("d", "44")])));
    map.attach(shared(owned(&[("c", "333"), ("d", "444"), ("e", "555")])));
    map
}

struct Walkthrough<'a, W> {
    out: &'a mut W,
    config: &'a DemoConfig,
    map: LayeredMap<String, String>,
}

impl<W: Write> Walkthrough<'_, W> {
    fn step(&mut self, title: &str) -> Result<()> {
        info!(step = title, "walkthrough");
        if self.config.narrate {
            writeln!(self.out, "# {title}")?;
        }
        Ok(())
    }

    fn show(&mut self, key: &str) -> Result<()> {
        let key = key.to_string();
        match self.map.get(&key) {
            Ok(value) => {
                write!(self.out, "{key} = {value}")?;
                if self.config.show_origins {
                    if let Some(origin) = self.map.origin(&key) {
                        write!(self.out, "  ({origin})")?;
                    }
                }
                writeln!(self.out)?;
            }
            Err(err) => writeln!(self.out, "{key}: {err}")?,
        }
        Ok(())
    }

    fn show_contains(&mut self, key: &str) -> Result<()> {
        let present = self.map.contains_key(&key.to_string());
        writeln!(self.out, "contains {key}: {present}")?;
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        self.step("resolved values")?;
        for key in ["a", "b", "c", "d", "e"] {
            self.show(key)?;
        }
        writeln!(
            self.out,
            "entries: {}, distinct keys: {}, layers: {}",
            self.map.len(),
            self.map.keys().len(),
            self.map.layer_count()
        )?;

        self.step("set e = 55 promotes into the primary layer")?;
        self.map.set("e".to_string(), "55".to_string());
        self.show("e")?;
        self.map.remove(&"e".to_string());
        self.show("e")?;

        self.step("remove a from the primary layer")?;
        self.map.remove(&"a".to_string());
        self.show("a")?;

        self.step("insert f, then remove it")?;
        self.map.insert("f".to_string(), "66".to_string())?;
        self.show("f")?;
        self.map.remove(&"f".to_string());
        self.show_contains("f")?;

        self.step("attach {g: 77} in front, then detach it")?;
        self.map.attach_at(shared(owned(&[("g", "77")])), 0);
        self.show("g")?;
        self.map.detach(0);
        self.show_contains("g")?;

        self.step("clear layers")?;
        self.map.clear_layers();
        writeln!(self.out, "layers: {}", self.map.layer_count())?;

        Ok(())
    }
}

/// Runs the walkthrough on the demo map, writing to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_walkthrough<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    Walkthrough {
        out,
        config,
        map: fixture(),
    }
    .run()
}
