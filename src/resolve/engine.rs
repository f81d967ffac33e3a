//! Version resolution engine.
//!
//! Turns an abstract deck into a concrete one by choosing a version for
//! every copy of every card. Each `DeckEntry` is resolved on its own through
//! four tiers, stopping at the first that assigns every copy:
//!
//! 1. **Exact fit**: the most preferred version with enough copies for the
//!    whole entry takes every copy, keeping the entry uniform.
//! 2. **Section fit**: sections in priority order each take the first
//!    preferred version whose remaining copies cover the whole section.
//! 3. **Greedy fill**: preferred versions pour their remaining copies into
//!    the outstanding sections, in priority order.
//! 4. **Overflow**: whatever is still missing goes to one overflow version,
//!    the most preferred available version or, if nothing is available,
//!    the minimum of the overflow order over every known version.
//!
//! Tier 4 always completes an entry, so shortages never fail resolution.
//! The only error is a card with no versions at all.
//!
//! ## Ties
//!
//! Candidates are ordered with a stable sort and minimums take the first
//! of equal elements, so versions the order considers equal are decided by
//! catalog iteration order. Use a strict total order (for example
//! `ConfiguredOrder`, or any order combined with `ByIdentity` via
//! `then_by`) to make results independent of catalog order.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::policy::{Availability, VersionCatalog, VersionOrder, UNLIMITED};
use crate::core::error::{Error, Result};
use crate::deck::{Deck, DeckBuilder, DeckEntry, Section, SectionCounts};

/// Tier that completed an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// One version covered the whole entry.
    ExactFit,
    /// Every section was covered by a single version.
    SectionFit,
    /// Several versions were combined within sections.
    GreedyFill,
    /// Demand exceeded availability; the rest went to an overflow version.
    Overflow,
}

/// Copies assigned beyond what was available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortfall<V> {
    /// Version that received the missing copies.
    pub version: V,
    /// Number of copies assigned beyond availability.
    pub missing: u64,
}

/// One resolved entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEntry<V: Ord + Clone> {
    /// Tier that completed the entry.
    pub tier: Tier,
    /// Concrete copies, in the entry's original sections.
    pub deck: Deck<V>,
    /// Set when tier 4 had to assign copies that are not available.
    pub shortfall: Option<Shortfall<V>>,
}

/// A resolved deck plus every shortage encountered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<A, V: Ord + Clone> {
    /// The concrete deck.
    pub deck: Deck<V>,
    /// Cards whose demand exceeded availability, in card order.
    pub shortfalls: Vec<(A, Shortfall<V>)>,
}

/// Version candidate with availability bookkeeping.
struct Candidate<V> {
    version: V,
    available: u64,
    used: u64,
}

impl<V> Candidate<V> {
    fn remaining(&self) -> u64 {
        self.available - self.used
    }
}

/// Availability widened to `u64`; `UNLIMITED` never runs out.
fn capacity(available: u32) -> u64 {
    if available == UNLIMITED {
        u64::MAX
    } else {
        u64::from(available)
    }
}

/// Resolves abstract decks into concrete decks.
///
/// Borrowed collaborators:
/// - `catalog`: versions per card
/// - `availability`: usable copies per version
/// - `preference`: which version to pick when a choice is free
/// - `overflow`: which version to pick when nothing is available
///   (defaults to `preference`)
///
/// ## Example
///
/// ```
/// use ccg_decklist::deck::{Deck, Section};
/// use ccg_decklist::resolve::{Collection, VersionCatalog, VersionResolver};
///
/// struct Printings;
///
/// impl VersionCatalog<&'static str> for Printings {
///     type Version = String;
///
///     fn versions_of(&self, card: &&'static str) -> Vec<String> {
///         vec![format!("{card} (A)"), format!("{card} (B)")]
///     }
/// }
///
/// let owned: Collection<String> = [("Forest (A)".to_string(), 10)].into_iter().collect();
/// let prefer_a = |a: &String, b: &String| a.cmp(b);
///
/// let deck: Deck<&str> = [(Section::Main, "Forest", 4)].into_iter().collect();
/// let resolved = VersionResolver::new(&Printings, &owned, &prefer_a)
///     .resolve(&deck)
///     .unwrap();
///
/// assert_eq!(resolved.count(Section::Main, &"Forest (A)".to_string()), 4);
/// ```
pub struct VersionResolver<'a, Cat, Av, P, O = P> {
    catalog: &'a Cat,
    availability: &'a Av,
    preference: &'a P,
    overflow: &'a O,
}

impl<'a, Cat, Av, P> VersionResolver<'a, Cat, Av, P, P> {
    /// Create a resolver whose overflow order is the preference order.
    #[must_use]
    pub fn new(catalog: &'a Cat, availability: &'a Av, preference: &'a P) -> Self {
        Self {
            catalog,
            availability,
            preference,
            overflow: preference,
        }
    }
}

impl<'a, Cat, Av, P, O> VersionResolver<'a, Cat, Av, P, O> {
    /// Use a separate order to pick the overflow version.
    #[must_use]
    pub fn with_overflow<O2>(self, overflow: &'a O2) -> VersionResolver<'a, Cat, Av, P, O2> {
        VersionResolver {
            catalog: self.catalog,
            availability: self.availability,
            preference: self.preference,
            overflow,
        }
    }

    /// Resolve a whole deck.
    ///
    /// Fails only if some card has no versions; no partial deck is returned.
    pub fn resolve<A>(&self, deck: &Deck<A>) -> Result<Deck<Cat::Version>>
    where
        A: Ord + Clone + Display,
        Cat: VersionCatalog<A>,
        Av: Availability<Cat::Version>,
        P: VersionOrder<Cat::Version>,
        O: VersionOrder<Cat::Version>,
    {
        self.resolve_report(deck).map(|resolution| resolution.deck)
    }

    /// Resolve a whole deck and report every shortage.
    pub fn resolve_report<A>(&self, deck: &Deck<A>) -> Result<Resolution<A, Cat::Version>>
    where
        A: Ord + Clone + Display,
        Cat: VersionCatalog<A>,
        Av: Availability<Cat::Version>,
        P: VersionOrder<Cat::Version>,
        O: VersionOrder<Cat::Version>,
    {
        let mut parts = Vec::new();
        let mut shortfalls = Vec::new();

        for entry in deck.entries() {
            let resolved = self.resolve_entry(&entry)?;
            if let Some(shortfall) = resolved.shortfall {
                shortfalls.push((entry.card().clone(), shortfall));
            }
            parts.push(resolved.deck);
        }

        Ok(Resolution {
            deck: Deck::merge_all(parts),
            shortfalls,
        })
    }

    /// Resolve one entry.
    pub fn resolve_entry<A>(&self, entry: &DeckEntry<A>) -> Result<ResolvedEntry<Cat::Version>>
    where
        A: Display,
        Cat: VersionCatalog<A>,
        Av: Availability<Cat::Version>,
        P: VersionOrder<Cat::Version>,
        O: VersionOrder<Cat::Version>,
    {
        let versions = self.catalog.versions_of(entry.card());
        let resolved = self.resolve_versions(entry.counts(), entry.total(), &versions);

        match &resolved {
            Some(resolved) => {
                debug!(
                    target: "ccg_decklist::resolve",
                    card = %entry.card(),
                    copies = entry.total(),
                    candidates = versions.len(),
                    tier = ?resolved.tier,
                    "resolved entry"
                );
                if let Some(shortfall) = &resolved.shortfall {
                    warn!(
                        target: "ccg_decklist::resolve",
                        card = %entry.card(),
                        missing = shortfall.missing,
                        "demand exceeds availability"
                    );
                }
            }
            None => {
                warn!(
                    target: "ccg_decklist::resolve",
                    card = %entry.card(),
                    "catalog has no versions for card"
                );
            }
        }

        resolved.ok_or_else(|| Error::UnresolvableCard {
            card: entry.card().to_string(),
        })
    }

    /// Run the four tiers. `None` when `versions` is empty.
    fn resolve_versions<V>(
        &self,
        counts: &[(Section, u32)],
        total: u64,
        versions: &[V],
    ) -> Option<ResolvedEntry<V>>
    where
        V: Ord + Clone,
        Av: Availability<V>,
        P: VersionOrder<V>,
        O: VersionOrder<V>,
    {
        // Tier 1: one version for everything.
        let exact = versions
            .iter()
            .filter(|v| capacity(self.availability.available(v)) >= total)
            .min_by(|a, b| self.preference.compare(a, b));
        if let Some(version) = exact {
            let mut builder = DeckBuilder::new();
            for (section, count) in counts {
                builder.add(*section, version.clone(), *count);
            }
            return Some(ResolvedEntry {
                tier: Tier::ExactFit,
                deck: builder.build(),
                shortfall: None,
            });
        }

        let mut candidates: Vec<Candidate<V>> = versions
            .iter()
            .filter_map(|version| {
                let available = capacity(self.availability.available(version));
                (available > 0).then(|| Candidate {
                    version: version.clone(),
                    available,
                    used: 0,
                })
            })
            .collect();
        candidates.sort_by(|a, b| self.preference.compare(&a.version, &b.version));

        let mut outstanding: SectionCounts = counts.iter().copied().collect();
        let mut builder = DeckBuilder::new();

        // Tier 2: whole sections, highest priority first.
        for (section, need) in outstanding.iter_mut() {
            let wanted = u64::from(*need);
            if let Some(candidate) = candidates.iter_mut().find(|c| c.remaining() >= wanted) {
                candidate.used += wanted;
                builder.add(*section, candidate.version.clone(), *need);
                *need = 0;
            }
        }
        if is_satisfied(&outstanding) {
            return Some(ResolvedEntry {
                tier: Tier::SectionFit,
                deck: builder.build(),
                shortfall: None,
            });
        }

        // Tier 3: pour remaining copies into outstanding sections.
        for candidate in candidates.iter_mut() {
            for (section, need) in outstanding.iter_mut() {
                // Bounded by `need`, so the narrowing is lossless.
                let take = candidate.remaining().min(u64::from(*need)) as u32;
                if take == 0 {
                    continue;
                }
                candidate.used += u64::from(take);
                *need -= take;
                builder.add(*section, candidate.version.clone(), take);
            }
            if is_satisfied(&outstanding) {
                break;
            }
        }
        if is_satisfied(&outstanding) {
            return Some(ResolvedEntry {
                tier: Tier::GreedyFill,
                deck: builder.build(),
                shortfall: None,
            });
        }

        // Tier 4: one overflow version takes the rest.
        let overflow = candidates
            .first()
            .map(|c| &c.version)
            .or_else(|| versions.iter().min_by(|a, b| self.overflow.compare(a, b)))?;

        let mut missing = 0u64;
        for (section, need) in outstanding.iter().filter(|(_, n)| *n > 0) {
            builder.add(*section, overflow.clone(), *need);
            missing += u64::from(*need);
        }

        Some(ResolvedEntry {
            tier: Tier::Overflow,
            deck: builder.build(),
            shortfall: Some(Shortfall {
                version: overflow.clone(),
                missing,
            }),
        })
    }
}

fn is_satisfied(outstanding: &SectionCounts) -> bool {
    outstanding.iter().all(|(_, need)| *need == 0)
}
