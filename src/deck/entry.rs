//! Per-card view of a deck.

use smallvec::SmallVec;

use super::section::Section;

/// Section counts for one card, in section priority order.
pub type SectionCounts = SmallVec<[(Section, u32); 4]>;

/// All copies of one card across a deck's sections.
///
/// Entries are derived from a `Deck` with `Deck::entries` and are the unit
/// the version resolver processes. Counts are always positive and listed
/// in section priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckEntry<C> {
    card: C,
    counts: SectionCounts,
    total: u64,
}

impl<C> DeckEntry<C> {
    /// Create an entry from section counts.
    ///
    /// Zero counts are skipped, repeated sections are summed and the result
    /// is sorted into priority order.
    #[must_use]
    pub fn new(card: C, counts: impl IntoIterator<Item = (Section, u32)>) -> Self {
        let mut merged = SectionCounts::new();
        for (section, count) in counts {
            if count == 0 {
                continue;
            }
            match merged.iter_mut().find(|(s, _)| *s == section) {
                Some((_, existing)) => *existing = existing.saturating_add(count),
                None => merged.push((section, count)),
            }
        }
        merged.sort_by_key(|(section, _)| *section);
        let total = merged.iter().map(|(_, n)| u64::from(*n)).sum();
        Self {
            card,
            counts: merged,
            total,
        }
    }

    /// The card this entry describes.
    #[must_use]
    pub fn card(&self) -> &C {
        &self.card
    }

    /// Total copies across all sections.
    ///
    /// Widened to `u64` so sections near `u32::MAX` add up exactly.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Copies held in one section.
    #[must_use]
    pub fn count(&self, section: Section) -> u32 {
        self.counts
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, n)| *n)
    }

    /// Section counts in priority order.
    #[must_use]
    pub fn counts(&self) -> &[(Section, u32)] {
        &self.counts
    }

    /// Check if the entry holds no copies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub(crate) fn push(&mut self, section: Section, count: u32) {
        self.counts.push((section, count));
        self.total += u64::from(count);
    }

    pub(crate) fn empty(card: C) -> Self {
        Self {
            card,
            counts: SectionCounts::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_and_merges() {
        let entry = DeckEntry::new(
            "Island",
            [
                (Section::Sideboard, 1),
                (Section::Main, 3),
                (Section::Commander, 0),
                (Section::Main, 1),
            ],
        );

        assert_eq!(entry.counts(), &[(Section::Main, 4), (Section::Sideboard, 1)]);
        assert_eq!(entry.total(), 5);
        assert_eq!(entry.count(Section::Commander), 0);
        assert_eq!(*entry.card(), "Island");
    }

    #[test]
    fn test_empty_entry() {
        let entry = DeckEntry::new("Island", []);
        assert!(entry.is_empty());
        assert_eq!(entry.total(), 0);
    }

    #[test]
    fn test_total_does_not_saturate() {
        let entry = DeckEntry::new("Plains", [(Section::Main, u32::MAX), (Section::Sideboard, 1)]);
        assert_eq!(entry.total(), u64::from(u32::MAX) + 1);
        assert_eq!(entry.count(Section::Main), u32::MAX);
    }
}
