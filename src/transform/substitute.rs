//! Card substitution.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::DeckTransform;
use crate::deck::Deck;

/// Replaces or removes specific cards.
///
/// Typically applied to abstract decks before resolution, for instance to
/// swap cards a format does not allow. Replacing two cards with the same
/// target merges their counts; removed cards disappear from every section.
#[derive(Clone, Debug)]
pub struct Substitute<C> {
    rules: FxHashMap<C, Option<C>>,
}

impl<C> Default for Substitute<C> {
    fn default() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }
}

impl<C: Eq + Hash> Substitute<C> {
    /// Create a substitution with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every copy of `from` with `to`.
    #[must_use]
    pub fn replace(mut self, from: C, to: C) -> Self {
        self.rules.insert(from, Some(to));
        self
    }

    /// Remove every copy of `card`.
    #[must_use]
    pub fn remove(mut self, card: C) -> Self {
        self.rules.insert(card, None);
        self
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<C: Ord + Clone + Hash> DeckTransform<C> for Substitute<C> {
    fn apply(&self, deck: &Deck<C>) -> Deck<C> {
        if self.rules.is_empty() {
            return deck.clone();
        }
        deck.filter_map(|card| match self.rules.get(card) {
            Some(rule) => rule.clone(),
            None => Some(card.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Section;

    fn sample() -> Deck<&'static str> {
        [
            (Section::Main, "Black Lotus", 1),
            (Section::Main, "Dark Ritual", 3),
            (Section::Sideboard, "Black Lotus", 1),
            (Section::Main, "Swamp", 10),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_replace_merges_counts() {
        let result = Substitute::new()
            .replace("Black Lotus", "Dark Ritual")
            .apply(&sample());

        assert_eq!(result.count(Section::Main, &"Dark Ritual"), 4);
        assert_eq!(result.count(Section::Sideboard, &"Dark Ritual"), 1);
        assert!(!result.contains(&"Black Lotus"));
    }

    #[test]
    fn test_remove_drops_empty_sections() {
        let rules = Substitute::new().remove("Black Lotus");
        assert_eq!(rules.len(), 1);

        let result = rules.apply(&sample());
        assert!(result.section(Section::Sideboard).is_none());
        assert_eq!(result.len(), 13);
    }

    #[test]
    fn test_no_rules_is_identity() {
        let rules: Substitute<&str> = Substitute::new();
        assert!(rules.is_empty());
        assert_eq!(rules.apply(&sample()), sample());
    }
}
