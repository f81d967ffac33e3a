//! Immutable decks.
//!
//! `Deck<C>` maps each `Section` to a multiset of cards. The card type is
//! generic so the same container holds abstract cards before version
//! resolution and concrete versions after it.
//!
//! Decks use persistent `im::OrdMap`s: cloning is O(1), iteration order is
//! deterministic (sections in priority order, cards by `Ord`), and every
//! transformation returns a new deck.

use std::collections::{BTreeMap, BTreeSet};

use im::OrdMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::builder::DeckBuilder;
use super::entry::DeckEntry;
use super::section::Section;
use crate::core::error::Error;

/// Card multiset of a single section.
pub type Multiset<C> = OrdMap<C, u32>;

/// Immutable mapping from section to a multiset of cards.
///
/// Invariants:
/// - no section maps to an empty multiset
/// - every count is positive
///
/// ## Example
///
/// ```
/// use ccg_decklist::deck::{Deck, Section};
///
/// let deck: Deck<&str> = [
///     (Section::Main, "Forest", 4),
///     (Section::Sideboard, "Forest", 1),
///     (Section::Main, "Llanowar Elves", 4),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(deck.total(&"Forest"), 5);
/// assert_eq!(deck.len(), 9);
///
/// let no_lands = deck.filter(|card| *card != "Forest");
/// assert!(no_lands.section(Section::Sideboard).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck<C: Ord + Clone> {
    sections: OrdMap<Section, Multiset<C>>,
}

impl<C: Ord + Clone> Default for Deck<C> {
    fn default() -> Self {
        Self {
            sections: OrdMap::new(),
        }
    }
}

impl<C: Ord + Clone> Deck<C> {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a deck.
    #[must_use]
    pub fn builder() -> DeckBuilder<C> {
        DeckBuilder::new()
    }

    /// Assemble a deck from already-validated sections.
    pub(crate) fn from_sections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (Section, Multiset<C>)>,
    {
        Self {
            sections: sections
                .into_iter()
                .filter(|(_, cards)| !cards.is_empty())
                .collect(),
        }
    }

    /// Get the multiset of one section, or `None` if the section is empty.
    #[must_use]
    pub fn section(&self, section: Section) -> Option<&Multiset<C>> {
        self.sections.get(&section)
    }

    /// Iterate over non-empty sections in priority order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &Multiset<C>)> + '_ {
        self.sections.iter().map(|(section, cards)| (*section, cards))
    }

    /// Copies of a card in one section.
    #[must_use]
    pub fn count(&self, section: Section, card: &C) -> u32 {
        self.sections
            .get(&section)
            .and_then(|cards| cards.get(card))
            .copied()
            .unwrap_or(0)
    }

    /// Copies of a card across all sections.
    #[must_use]
    pub fn total(&self, card: &C) -> u32 {
        self.sections
            .values()
            .filter_map(|cards| cards.get(card))
            .fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    /// Check if any section holds the card.
    #[must_use]
    pub fn contains(&self, card: &C) -> bool {
        self.sections.values().any(|cards| cards.contains_key(card))
    }

    /// Total number of copies in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections
            .values()
            .flat_map(|cards| cards.values())
            .map(|n| *n as usize)
            .sum()
    }

    /// Check if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Distinct cards, in card order.
    #[must_use]
    pub fn cards(&self) -> Vec<C> {
        let distinct: BTreeSet<&C> = self
            .sections
            .values()
            .flat_map(|cards| cards.keys())
            .collect();
        distinct.into_iter().cloned().collect()
    }

    /// One entry per distinct card, in card order.
    #[must_use]
    pub fn entries(&self) -> Vec<DeckEntry<C>> {
        let mut by_card: BTreeMap<C, DeckEntry<C>> = BTreeMap::new();
        for (section, cards) in self.sections() {
            for (card, count) in cards.iter() {
                by_card
                    .entry(card.clone())
                    .or_insert_with(|| DeckEntry::empty(card.clone()))
                    .push(section, *count);
            }
        }
        by_card.into_values().collect()
    }

    /// Map every card through `f`.
    ///
    /// Cards that map to the same image have their counts merged.
    #[must_use]
    pub fn map<D, F>(&self, mut f: F) -> Deck<D>
    where
        D: Ord + Clone,
        F: FnMut(&C) -> D,
    {
        self.flat_map_groups(|_, card, count| Some((f(card), count)))
    }

    /// Map every card through a fallible `f`, stopping at the first error.
    pub fn try_map<D, E, F>(&self, mut f: F) -> Result<Deck<D>, E>
    where
        D: Ord + Clone,
        F: FnMut(&C) -> Result<D, E>,
    {
        let mut builder = DeckBuilder::new();
        for (section, cards) in self.sections() {
            for (card, count) in cards.iter() {
                builder.add(section, f(card)?, *count);
            }
        }
        Ok(builder.build())
    }

    /// Map every card to zero or one replacement. `None` drops the card.
    #[must_use]
    pub fn filter_map<D, F>(&self, mut f: F) -> Deck<D>
    where
        D: Ord + Clone,
        F: FnMut(&C) -> Option<D>,
    {
        self.flat_map_groups(|_, card, count| f(card).map(|image| (image, count)))
    }

    /// Keep only cards matching the predicate.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Deck<C>
    where
        F: FnMut(&C) -> bool,
    {
        Self::from_sections(self.sections().map(|(section, cards)| {
            let kept: Multiset<C> = cards
                .iter()
                .filter(|(card, _)| keep(*card))
                .map(|(card, count)| (card.clone(), *count))
                .collect();
            (section, kept)
        }))
    }

    /// Replace every (section, card, count) group with an arbitrary multiset.
    ///
    /// Zero counts in the replacement are dropped.
    #[must_use]
    pub fn flat_map_groups<D, I, F>(&self, mut f: F) -> Deck<D>
    where
        D: Ord + Clone,
        I: IntoIterator<Item = (D, u32)>,
        F: FnMut(Section, &C, u32) -> I,
    {
        let mut builder = DeckBuilder::new();
        for (section, cards) in self.sections() {
            for (card, count) in cards.iter() {
                builder.extend(section, f(section, card, *count));
            }
        }
        builder.build()
    }

    /// Replace the copies of one card, section by section.
    ///
    /// `f` receives the section and the number of copies held there and
    /// returns the replacement multiset. Other cards are left untouched.
    #[must_use]
    pub fn replace_group<I, F>(&self, card: &C, mut f: F) -> Deck<C>
    where
        I: IntoIterator<Item = (C, u32)>,
        F: FnMut(Section, u32) -> I,
    {
        if !self.contains(card) {
            return self.clone();
        }

        let mut builder = DeckBuilder::new();
        for (section, cards) in self.sections() {
            for (existing, count) in cards.iter() {
                if existing == card {
                    builder.extend(section, f(section, *count));
                } else {
                    builder.add(section, existing.clone(), *count);
                }
            }
        }
        builder.build()
    }

    /// Multiset sum of two decks, section by section.
    #[must_use]
    pub fn merge(&self, other: &Deck<C>) -> Deck<C> {
        if self.is_empty() {
            return other.clone();
        }
        let mut builder = DeckBuilder::new();
        builder.extend_deck(self).extend_deck(other);
        builder.build()
    }

    /// Multiset sum of many decks.
    #[must_use]
    pub fn merge_all<I>(decks: I) -> Deck<C>
    where
        I: IntoIterator<Item = Deck<C>>,
    {
        let mut builder = DeckBuilder::new();
        for deck in decks {
            builder.extend_deck(&deck);
        }
        builder.build()
    }
}

impl<C: Ord + Clone> FromIterator<(Section, C, u32)> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = (Section, C, u32)>>(iter: T) -> Self {
        let mut builder = DeckBuilder::new();
        for (section, card, count) in iter {
            builder.add(section, card, count);
        }
        builder.build()
    }
}

/// Wire form: `{ section: [[card, count], ...] }`.
#[derive(Serialize, Deserialize)]
struct DeckRepr<C>(BTreeMap<Section, Vec<(C, u32)>>);

impl<C: Ord + Clone + Serialize> Serialize for Deck<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = DeckRepr(
            self.sections()
                .map(|(section, cards)| {
                    let groups = cards
                        .iter()
                        .map(|(card, count)| (card.clone(), *count))
                        .collect();
                    (section, groups)
                })
                .collect(),
        );
        repr.serialize(serializer)
    }
}

impl<'de, C: Ord + Clone + Deserialize<'de>> Deserialize<'de> for Deck<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let DeckRepr(sections) = DeckRepr::<C>::deserialize(deserializer)?;
        let mut builder = DeckBuilder::new();
        for (section, groups) in sections {
            if groups.iter().any(|(_, count)| *count == 0) {
                return Err(serde::de::Error::custom(Error::ZeroCount { section }));
            }
            builder.extend(section, groups);
        }
        Ok(builder.build())
    }
}
