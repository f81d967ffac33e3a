//! Deck transformation hooks.
//!
//! A transformation is any `Deck -> Deck` function. Hooks run either before
//! resolution on abstract cards (e.g. substituting disallowed cards) or
//! after it on concrete versions (e.g. spreading basic lands across several
//! printings). Every hook returns a new deck and preserves the deck
//! invariants, since all decks are produced by the deck container's own
//! operations.
//!
//! ## Example Usage
//!
//! ```
//! use ccg_decklist::deck::{Deck, Section};
//! use ccg_decklist::transform::{DeckTransform, Pipeline, Substitute};
//!
//! let deck: Deck<&str> = [(Section::Main, "Ancestral Recall", 1), (Section::Main, "Island", 4)]
//!     .into_iter()
//!     .collect();
//!
//! let pipeline = Pipeline::new()
//!     .then(Substitute::new().replace("Ancestral Recall", "Brainstorm"))
//!     .then(|deck: &Deck<&'static str>| deck.filter(|card| *card != "Island"));
//!
//! let result = pipeline.apply(&deck);
//! assert_eq!(result.total(&"Brainstorm"), 1);
//! assert_eq!(result.len(), 1);
//! ```

mod spread;
mod substitute;

pub use spread::SpreadPrintings;
pub use substitute::Substitute;

use crate::deck::Deck;

/// A pure deck-to-deck transformation.
pub trait DeckTransform<C: Ord + Clone> {
    /// Apply the transformation, returning a new deck.
    fn apply(&self, deck: &Deck<C>) -> Deck<C>;
}

impl<C, F> DeckTransform<C> for F
where
    C: Ord + Clone,
    F: Fn(&Deck<C>) -> Deck<C>,
{
    fn apply(&self, deck: &Deck<C>) -> Deck<C> {
        self(deck)
    }
}

/// Ordered chain of transformations.
pub struct Pipeline<C> {
    stages: Vec<Box<dyn DeckTransform<C>>>,
}

impl<C: Ord + Clone> Default for Pipeline<C> {
    fn default() -> Self {
        Self { stages: Vec::new() }
    }
}

impl<C: Ord + Clone> Pipeline<C> {
    /// Create an empty pipeline. An empty pipeline returns its input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage (builder pattern).
    #[must_use]
    pub fn then<T>(mut self, stage: T) -> Self
    where
        T: DeckTransform<C> + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append a stage.
    pub fn push<T>(&mut self, stage: T)
    where
        T: DeckTransform<C> + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<C: Ord + Clone> DeckTransform<C> for Pipeline<C> {
    fn apply(&self, deck: &Deck<C>) -> Deck<C> {
        self.stages
            .iter()
            .fold(deck.clone(), |current, stage| stage.apply(&current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Section;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let deck: Deck<u32> = [(Section::Main, 1, 2)].into_iter().collect();
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(&deck), deck);
    }

    #[test]
    fn test_stages_run_in_order() {
        let deck: Deck<u32> = [(Section::Main, 1, 2)].into_iter().collect();

        let mut pipeline = Pipeline::new();
        pipeline.push(|d: &Deck<u32>| d.map(|c| c * 10));
        pipeline.push(|d: &Deck<u32>| d.map(|c| c + 1));

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.apply(&deck).count(Section::Main, &11), 2);
    }
}
