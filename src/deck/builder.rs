//! Mutable deck assembly.

use std::collections::BTreeMap;

use super::container::Deck;
use super::section::Section;

/// Accumulates card counts into sections before publishing a `Deck`.
///
/// The builder is the only mutable deck value. It is consumed by `build`,
/// which drops empty sections so the resulting deck never exposes a
/// zero-count element.
///
/// ## Example
///
/// ```
/// use ccg_decklist::deck::{DeckBuilder, Section};
///
/// let mut builder = DeckBuilder::new();
/// builder.add(Section::Main, "Forest", 3);
/// builder.add_one(Section::Main, "Forest");
/// builder.add(Section::Sideboard, "Naturalize", 0);
///
/// let deck = builder.build();
/// assert_eq!(deck.total(&"Forest"), 4);
/// assert!(deck.section(Section::Sideboard).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder<C> {
    sections: BTreeMap<Section, BTreeMap<C, u32>>,
}

impl<C> Default for DeckBuilder<C> {
    fn default() -> Self {
        Self {
            sections: BTreeMap::new(),
        }
    }
}

impl<C: Ord + Clone> DeckBuilder<C> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of a card to a section. Zero counts are ignored.
    pub fn add(&mut self, section: Section, card: C, count: u32) -> &mut Self {
        if count > 0 {
            let slot = self
                .sections
                .entry(section)
                .or_default()
                .entry(card)
                .or_insert(0);
            *slot = slot.saturating_add(count);
        }
        self
    }

    /// Add a single copy of a card.
    pub fn add_one(&mut self, section: Section, card: C) -> &mut Self {
        self.add(section, card, 1)
    }

    /// Add several (card, count) groups to one section.
    pub fn extend<I>(&mut self, section: Section, cards: I) -> &mut Self
    where
        I: IntoIterator<Item = (C, u32)>,
    {
        for (card, count) in cards {
            self.add(section, card, count);
        }
        self
    }

    /// Add every group of an existing deck.
    pub fn extend_deck(&mut self, deck: &Deck<C>) -> &mut Self {
        for (section, cards) in deck.sections() {
            for (card, count) in cards.iter() {
                self.add(section, card.clone(), *count);
            }
        }
        self
    }

    /// Copies of a card accumulated so far in one section.
    #[must_use]
    pub fn count(&self, section: Section, card: &C) -> u32 {
        self.sections
            .get(&section)
            .and_then(|cards| cards.get(card))
            .copied()
            .unwrap_or(0)
    }

    /// Publish the immutable deck.
    #[must_use]
    pub fn build(self) -> Deck<C> {
        Deck::from_sections(
            self.sections
                .into_iter()
                .filter(|(_, cards)| !cards.is_empty())
                .map(|(section, cards)| (section, cards.into_iter().collect())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_counts() {
        let mut builder = DeckBuilder::new();
        builder
            .add(Section::Main, "Shock", 2)
            .add(Section::Main, "Shock", 2)
            .add_one(Section::Sideboard, "Shock");

        assert_eq!(builder.count(Section::Main, &"Shock"), 4);

        let deck = builder.build();
        assert_eq!(deck.total(&"Shock"), 5);
    }

    #[test]
    fn test_zero_counts_leave_no_section() {
        let mut builder = DeckBuilder::new();
        builder.add(Section::Companion, "Lurrus", 0);

        let deck = builder.build();
        assert!(deck.is_empty());
        assert_eq!(deck.sections().count(), 0);
    }

    #[test]
    fn test_extend_deck() {
        let mut first = DeckBuilder::new();
        first.add(Section::Main, "Forest", 2);
        let first = first.build();

        let mut builder = DeckBuilder::new();
        builder.extend_deck(&first).extend_deck(&first);
        builder.extend(Section::Sideboard, [("Plains", 1), ("Swamp", 0)]);

        let deck = builder.build();
        assert_eq!(deck.count(Section::Main, &"Forest"), 4);
        assert_eq!(deck.count(Section::Sideboard, &"Plains"), 1);
        assert!(!deck.contains(&"Swamp"));
    }
}
