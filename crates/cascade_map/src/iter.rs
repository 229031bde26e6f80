//! Lazy iterators over every layer of a layered map.

use std::iter::{Fuse, FusedIterator};
use std::slice;

use cascade_foundation::{Layer, LayerIter, SharedLayer};

/// Iterator over the entries of a layered map, primary layer first.
///
/// Each attached layer is visited in list order once the previous one is
/// exhausted. Shadowed entries are not skipped.
pub struct Iter<'a, K, V> {
    primary: Fuse<im::hashmap::Iter<'a, K, V>>,
    layers: slice::Iter<'a, SharedLayer<K, V>>,
    current: Option<LayerIter<'a, K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(
        primary: im::hashmap::Iter<'a, K, V>,
        layers: slice::Iter<'a, SharedLayer<K, V>>,
    ) -> Self {
        Self {
            primary: primary.fuse(),
            layers,
            current: None,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.primary.next() {
            return Some(entry);
        }
        loop {
            if let Some(current) = &mut self.current {
                if let Some(entry) = current.next() {
                    return Some(entry);
                }
                self.current = None;
            }
            self.current = Some(self.layers.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Layer::len is exact, so pending layers count towards both bounds
        let pending: usize = self.layers.as_slice().iter().map(|layer| layer.len()).sum();
        let (primary_low, primary_high) = self.primary.size_hint();
        let (current_low, current_high) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), |current| current.size_hint());
        (
            primary_low + current_low + pending,
            primary_high
                .zip(current_high)
                .map(|(primary, current)| primary + current + pending),
        )
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the values of a layered map, shadowed values included.
pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(iter: Iter<'a, K, V>) -> Self {
        Self(iter)
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}
