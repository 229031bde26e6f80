//! Layered map with a writable primary layer and ordered shadowing layers.
//!
//! Lookups consult the primary layer first, then each attached layer in
//! list order. Writes only ever touch the primary layer; attached layers are
//! held through shared handles and are never mutated.

use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Index;

use cascade_foundation::{Error, Layer, LtMap, LtSet, Result, SharedLayer};
use tracing::{debug, trace};

use crate::iter::{Iter, Values};

/// The layer a key currently resolves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The writable primary layer.
    Primary,
    /// The attached layer at this list position.
    Layer(usize),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Layer(index) => write!(f, "layer {index}"),
        }
    }
}

/// A key-value container made of one primary layer and a list of read-only layers.
///
/// The primary layer shadows every attached layer, and a layer at a lower
/// list position shadows those after it. Size and iteration cover every
/// layer without deduplication, so a key present in three layers contributes
/// three entries.
///
/// Lookups are never cached: each read re-scans the current layers.
#[derive(Clone)]
pub struct LayeredMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    primary: LtMap<K, V>,
    layers: Vec<SharedLayer<K, V>>,
}

impl<K: Clone + Eq + Hash, V: Clone> Default for LayeredMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> LayeredMap<K, V> {
    /// Creates an empty map with no attached layers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary: LtMap::new(),
            layers: Vec::new(),
        }
    }

    // =========================================================================
    // Layer Management
    // =========================================================================

    /// Appends a layer with the lowest priority.
    pub fn attach(&mut self, layer: SharedLayer<K, V>) {
        self.attach_at(layer, usize::MAX);
    }

    /// Inserts a layer at `position` in the list.
    ///
    /// Positions past the current end append instead of failing.
    pub fn attach_at(&mut self, layer: SharedLayer<K, V>, position: usize) {
        let position = if position < self.layers.len() {
            self.layers.insert(position, layer);
            position
        } else {
            self.layers.push(layer);
            self.layers.len() - 1
        };
        debug!(position, layers = self.layers.len(), "attached layer");
    }

    /// Detaches the layer at `position`, returning its handle.
    ///
    /// Out-of-range positions are a no-op. The layer itself is left untouched.
    pub fn detach(&mut self, position: usize) -> Option<SharedLayer<K, V>> {
        if position >= self.layers.len() {
            debug!(position, layers = self.layers.len(), "detach ignored, no such layer");
            return None;
        }
        let layer = self.layers.remove(position);
        debug!(position, layers = self.layers.len(), "detached layer");
        Some(layer)
    }

    /// Detaches every layer. The primary layer is untouched.
    pub fn clear_layers(&mut self) {
        debug!(detached = self.layers.len(), "cleared layers");
        self.layers.clear();
    }

    /// Returns the number of attached layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the attached layers in priority order.
    #[must_use]
    pub fn layers(&self) -> &[SharedLayer<K, V>] {
        &self.layers
    }

    /// Returns the primary layer.
    #[must_use]
    pub fn primary(&self) -> &LtMap<K, V> {
        &self.primary
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Resolves `key` through the layers, or `None` if no layer holds it.
    #[must_use]
    pub fn try_get(&self, key: &K) -> Option<&V> {
        if let Some(value) = self.primary.get(key) {
            return Some(value);
        }
        self.layers.iter().enumerate().find_map(|(index, layer)| {
            let value = layer.get(key)?;
            trace!(layer = index, "resolved through attached layer");
            Some(value)
        })
    }

    /// Resolves `key` through the layers.
    ///
    /// # Errors
    ///
    /// Returns a key not found error if no layer holds the key.
    pub fn get(&self, key: &K) -> Result<&V>
    where
        K: fmt::Debug,
    {
        self.try_get(key)
            .ok_or_else(|| Error::key_not_found(key, self.layers.len() + 1))
    }

    /// Returns the layer that `key` resolves through.
    #[must_use]
    pub fn origin(&self, key: &K) -> Option<Origin> {
        if self.primary.contains_key(key) {
            return Some(Origin::Primary);
        }
        self.layers
            .iter()
            .position(|layer| layer.contains_key(key))
            .map(Origin::Layer)
    }

    /// Returns true if any layer holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.primary.contains_key(key) || self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Returns true if any layer holds `value`, shadowed or not.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.primary.values().any(|v| v == value)
            || self.layers.iter().any(|layer| layer.contains_value(value))
    }

    /// Returns true if any layer holds exactly this pair, shadowed or not.
    #[must_use]
    pub fn contains_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.primary.get(key).is_some_and(|v| v == value)
            || self.layers.iter().any(|layer| layer.contains_entry(key, value))
    }

    /// Returns every distinct key across all layers.
    #[must_use]
    pub fn keys(&self) -> LtSet<K> {
        let mut keys: LtSet<K> = self.primary.keys().cloned().collect();
        for layer in &self.layers {
            keys.extend(layer.iter().map(|(key, _)| key.clone()));
        }
        keys
    }

    /// Returns every value, primary layer first, shadowed values included.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns the total number of entries across all layers.
    ///
    /// Keys present in several layers are counted once per layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len() + self.layers.iter().map(|layer| layer.len()).sum::<usize>()
    }

    /// Returns true if no layer holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.layers.iter().all(|layer| layer.is_empty())
    }

    /// Returns an iterator over every entry, primary layer first.
    ///
    /// Shadowed entries are yielded too.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.primary.iter(), self.layers.iter())
    }

    // =========================================================================
    // Writes (primary layer only)
    // =========================================================================

    /// Inserts a new entry into the primary layer.
    ///
    /// Attached layers holding the key do not block the insert.
    ///
    /// # Errors
    ///
    /// Returns a duplicate key error if the primary layer already holds the key.
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: fmt::Debug,
    {
        if self.primary.contains_key(&key) {
            return Err(Error::duplicate_key(&key));
        }
        self.primary.set(key, value);
        Ok(())
    }

    /// Writes `value` into the primary layer, overwriting any primary entry.
    ///
    /// Returns the previous primary value. Attached layers are never written,
    /// even when the key currently resolves through one.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.primary.set(key, value)
    }

    /// Removes `key` from the primary layer.
    ///
    /// An attached layer holding the key becomes visible again.
    pub fn remove(&mut self, key: &K) -> bool {
        self.primary.take(key).is_some()
    }

    /// Removes every entry from the primary layer.
    pub fn clear_primary(&mut self) {
        self.primary.clear();
    }
}

impl<K, V> fmt::Debug for LayeredMap<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayeredMap")
            .field("primary", &self.primary)
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl<K, V> Index<&K> for LayeredMap<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if no layer holds the key.
    fn index(&self, key: &K) -> &V {
        self.get(key).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Extend<(K, V)> for LayeredMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Clone + Eq + Hash, V: Clone> FromIterator<(K, V)> for LayeredMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K: Clone + Eq + Hash, V: Clone> IntoIterator for &'a LayeredMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
