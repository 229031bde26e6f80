//! Read-only layer abstraction.
//!
//! A [`Layer`] is any mapping a layered map can consult for reads. The layered
//! map never mutates a layer; it only holds a [`SharedLayer`] handle, so the
//! same mapping can sit in several stacks or stay in use by its owner.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use crate::collections::LtMap;

/// Boxed iterator over the entries of a layer.
pub type LayerIter<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

/// Shared, non-owning handle to a read-only layer.
pub type SharedLayer<K, V> = Arc<dyn Layer<K, V> + Send + Sync>;

/// Wraps a mapping into a [`SharedLayer`].
pub fn shared<K, V, L>(layer: L) -> SharedLayer<K, V>
where
    L: Layer<K, V> + Send + Sync + 'static,
{
    Arc::new(layer)
}

/// A mapping that can be consulted as one layer of a layered map.
pub trait Layer<K, V> {
    /// Gets a value by key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over key-value pairs.
    fn iter(&self) -> LayerIter<'_, K, V>;

    /// Returns true if the layer holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the layer contains the key.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if any entry holds a value equal to `value`.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Returns true if the exact pair is present.
    fn contains_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.get(key).is_some_and(|v| v == value)
    }
}

impl<K, V, S> Layer<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> LayerIter<'_, K, V> {
        Box::new(HashMap::iter(self))
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<K: Ord, V> Layer<K, V> for BTreeMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> LayerIter<'_, K, V> {
        Box::new(BTreeMap::iter(self))
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

impl<K, V, S> Layer<K, V> for im::HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        im::HashMap::get(self, key)
    }

    fn len(&self) -> usize {
        im::HashMap::len(self)
    }

    fn iter(&self) -> LayerIter<'_, K, V> {
        Box::new(im::HashMap::iter(self))
    }
}

impl<K: Ord + Clone, V: Clone> Layer<K, V> for im::OrdMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        im::OrdMap::get(self, key)
    }

    fn len(&self) -> usize {
        im::OrdMap::len(self)
    }

    fn iter(&self) -> LayerIter<'_, K, V> {
        Box::new(im::OrdMap::iter(self))
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Layer<K, V> for LtMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        LtMap::get(self, key)
    }

    fn len(&self) -> usize {
        LtMap::len(self)
    }

    fn iter(&self) -> LayerIter<'_, K, V> {
        Box::new(LtMap::iter(self))
    }

    fn contains_key(&self, key: &K) -> bool {
        LtMap::contains_key(self, key)
    }
}
