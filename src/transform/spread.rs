//! Spreading copies of a card across several printings.
//!
//! A deck of seventeen Forests looks better with a mix of artworks than with
//! seventeen identical cards. `SpreadPrintings` rewrites resolved decks so
//! each configured card's copies are divided evenly across a set of
//! alternative versions. Which alternatives receive the extra copies is
//! decided by a `DeckRng` seeded from the deck itself, so the same deck and
//! salt always produce the same spread.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use super::DeckTransform;
use crate::cards::{CardId, CardRegistry, Version};
use crate::core::{DeckRng, StableId};
use crate::deck::Deck;

/// Version-level transform distributing copies across alternative versions.
///
/// Runs after resolution. It does not consult availability, so it suits
/// cards with unlimited copies such as basic lands.
#[derive(Clone, Debug, Default)]
pub struct SpreadPrintings {
    salt: i64,
    alternatives: FxHashMap<CardId, Vec<Version>>,
}

impl SpreadPrintings {
    /// Create a transform with no configured cards.
    #[must_use]
    pub fn new(salt: i64) -> Self {
        Self {
            salt,
            alternatives: FxHashMap::default(),
        }
    }

    /// Spread `card` across the given versions.
    ///
    /// Versions belonging to other cards are ignored. Duplicates are removed.
    #[must_use]
    pub fn with_alternatives(
        mut self,
        card: CardId,
        versions: impl IntoIterator<Item = Version>,
    ) -> Self {
        let mut versions: Vec<Version> = versions
            .into_iter()
            .filter(|v| v.card == card)
            .collect();
        versions.sort();
        versions.dedup();

        if versions.is_empty() {
            self.alternatives.remove(&card);
        } else {
            self.alternatives.insert(card, versions);
        }
        self
    }

    /// Spread `card` across every registered version accepted by `keep`.
    #[must_use]
    pub fn with_catalog_versions<F>(self, registry: &CardRegistry, card: CardId, keep: F) -> Self
    where
        F: Fn(&Version) -> bool,
    {
        let versions: Vec<Version> = registry
            .versions(card)
            .iter()
            .filter(|v| keep(v))
            .cloned()
            .collect();
        self.with_alternatives(card, versions)
    }

    /// Cards this transform rewrites.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.alternatives.keys().copied()
    }

    /// Salt mixed into the deck seed.
    #[must_use]
    pub fn salt(&self) -> i64 {
        self.salt
    }
}

/// Divide `count` copies across the shuffled alternatives.
///
/// Every alternative receives `count / k` copies and the first `count % k`
/// in shuffled order receive one more.
fn distribute(count: u32, alternatives: &[Version], rng: &mut DeckRng) -> Vec<(Version, u32)> {
    let mut order: SmallVec<[&Version; 8]> = alternatives.iter().collect();
    rng.shuffle(&mut order);

    let k = order.len() as u32;
    let base = count / k;
    let extra = count % k;
    order
        .into_iter()
        .enumerate()
        .map(|(i, version)| (version.clone(), base + u32::from((i as u32) < extra)))
        .filter(|(_, n)| *n > 0)
        .collect()
}

impl DeckTransform<Version> for SpreadPrintings {
    fn apply(&self, deck: &Deck<Version>) -> Deck<Version> {
        if self.alternatives.is_empty() {
            return deck.clone();
        }

        let rng = DeckRng::from_deck(deck, self.salt);
        debug!(
            target: "ccg_decklist::transform",
            seed = %rng.seed(),
            cards = self.alternatives.len(),
            "spreading printings"
        );

        deck.flat_map_groups(|section, version, count| {
            match self.alternatives.get(&version.card) {
                Some(alternatives) => {
                    let mut card_rng = rng
                        .for_card(version.card.stable_id())
                        .for_card(u64::from(section.priority()));
                    distribute(count, alternatives, &mut card_rng)
                }
                None => vec![(version.clone(), count)],
            }
        })
    }
}
