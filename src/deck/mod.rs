//! Deck container: sections, immutable decks, builders and per-card entries.
//!
//! ## Key Types
//!
//! - `Section`: Fixed deck compartments with a resolution priority
//! - `Deck<C>`: Immutable section -> multiset mapping, generic over the card type
//! - `DeckBuilder<C>`: The only mutable deck value, consumed by `build`
//! - `DeckEntry<C>`: All copies of one card with per-section counts

mod builder;
mod container;
mod entry;
mod section;

pub use builder::DeckBuilder;
pub use container::{Deck, Multiset};
pub use entry::{DeckEntry, SectionCounts};
pub use section::Section;
