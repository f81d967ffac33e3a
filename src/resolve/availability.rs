//! Availability oracles.
//!
//! - `Unlimited`: every version is available in any quantity
//! - `Collection`: an owned-collection multiset, counting copies per version

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::policy::{Availability, UNLIMITED};
use crate::deck::Deck;

/// Every version is available without limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl<V> Availability<V> for Unlimited {
    fn available(&self, _version: &V) -> u32 {
        UNLIMITED
    }
}

/// Multiset of owned versions.
///
/// ## Example
///
/// ```
/// use ccg_decklist::resolve::{Availability, Collection};
///
/// let mut collection = Collection::new();
/// collection.add("Forest (M10)", 3);
/// collection.add("Forest (M10)", 1);
///
/// assert_eq!(collection.available(&"Forest (M10)"), 4);
/// assert_eq!(collection.available(&"Forest (LEA)"), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Collection<V> {
    counts: FxHashMap<V, u32>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }
}

impl<V: Eq + Hash> Collection<V> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add owned copies of a version.
    pub fn add(&mut self, version: V, count: u32) {
        if count == 0 {
            return;
        }
        // `UNLIMITED` is reserved, so owned counts stop one short of it.
        let slot = self.counts.entry(version).or_insert(0);
        *slot = slot.saturating_add(count).min(UNLIMITED - 1);
    }

    /// Copies owned of a version.
    #[must_use]
    pub fn count(&self, version: &V) -> u32 {
        self.counts.get(version).copied().unwrap_or(0)
    }

    /// Number of distinct versions owned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (version, count) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, u32)> {
        self.counts.iter().map(|(v, n)| (v, *n))
    }
}

impl<V: Eq + Hash + Ord + Clone> Collection<V> {
    /// Build a collection from a deck, summing every section.
    #[must_use]
    pub fn from_deck(deck: &Deck<V>) -> Self {
        let mut collection = Self::new();
        for (_, cards) in deck.sections() {
            for (version, count) in cards.iter() {
                collection.add(version.clone(), *count);
            }
        }
        collection
    }
}

impl<V: Eq + Hash> FromIterator<(V, u32)> for Collection<V> {
    fn from_iter<T: IntoIterator<Item = (V, u32)>>(iter: T) -> Self {
        let mut collection = Self::new();
        for (version, count) in iter {
            collection.add(version, count);
        }
        collection
    }
}

impl<V: Eq + Hash> Availability<V> for Collection<V> {
    fn available(&self, version: &V) -> u32 {
        self.count(version)
    }
}
