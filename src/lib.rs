//! # ccg-decklist
//!
//! Decklist handling for collectible card games: abstract decks, concrete
//! card versions, and the engine that maps one to the other.
//!
//! ## Design Principles
//!
//! 1. **Catalog-Agnostic**: The resolver only sees the `VersionCatalog`,
//!    `Availability` and `VersionOrder` traits. Catalog storage and
//!    collection files live elsewhere.
//!
//! 2. **Count Preservation**: Resolution never changes how many copies a
//!    section holds. When a collection runs short, the missing copies are
//!    assigned anyway and reported as shortfalls.
//!
//! 3. **Determinism**: No wall-clock time or host entropy. Randomized
//!    transformations are seeded from deck content plus a caller salt.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Decks use `im` ordered maps, so clones
//!   are O(1) and iteration order is canonical.
//!
//! - **Four-Tier Resolution**: exact fit, section fit, greedy fill, then
//!   overflow. The first tier that succeeds decides.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, seeds and the deterministic RNG
//! - `deck`: Sections and the multi-section deck container
//! - `cards`: Cards, versions, editions and the catalog registry
//! - `resolve`: Collaborator traits, availability oracles, the resolver
//! - `transform`: Deck-to-deck hooks run before or after resolution

pub mod core;
pub mod deck;
pub mod cards;
pub mod resolve;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{
    Error, Result,
    Seed, StableId, DeckRng, DeckRngState,
    PreferenceConfig, ReleasePreference, ResolverConfig, ConfiguredOrder,
};

pub use crate::deck::{Deck, DeckBuilder, DeckEntry, Multiset, Section};

pub use crate::cards::{
    Card, CardId, CardTypeId, CardRegistry,
    Edition, Finish, Platform, Printed, Printing, Version, VersionId,
};

pub use crate::resolve::{
    VersionCatalog, Availability, VersionOrder, ByIdentity, ThenBy, UNLIMITED,
    Unlimited, Collection,
    VersionResolver, Resolution, ResolvedEntry, Shortfall, Tier,
};

pub use crate::transform::{DeckTransform, Pipeline, Substitute, SpreadPrintings};
