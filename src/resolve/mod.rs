//! Version resolution: turning abstract decks into concrete ones.
//!
//! ## Key Types
//!
//! - `VersionCatalog`, `Availability`, `VersionOrder`: collaborator contracts
//! - `Unlimited`, `Collection`: availability oracles
//! - `VersionResolver`: the four-tier resolution engine
//! - `Resolution`, `ResolvedEntry`, `Shortfall`: what resolution reports
//!
//! ## Example Usage
//!
//! ```
//! use ccg_decklist::cards::{CardRegistry, CardTypeId, Edition, Finish, Printing};
//! use ccg_decklist::core::PreferenceConfig;
//! use ccg_decklist::deck::{Deck, Section};
//! use ccg_decklist::resolve::{Unlimited, VersionResolver};
//!
//! let mut registry = CardRegistry::new();
//! let forest = registry.register_auto("Forest", CardTypeId::new(0));
//! let m10 = Edition::new("M10", "Magic 2010", 20090717);
//! registry.add_version(forest, Printing::Paper {
//!     edition: m10.into(),
//!     finish: Finish::Nonfoil,
//!     collector_number: "246".into(),
//! });
//!
//! let card = registry.get(forest).unwrap().clone();
//! let deck: Deck<_> = [(Section::Main, card, 17)].into_iter().collect();
//!
//! let order = PreferenceConfig::default().order();
//! let resolved = VersionResolver::new(&registry, &Unlimited, &order)
//!     .resolve(&deck)
//!     .unwrap();
//!
//! assert_eq!(resolved.len(), 17);
//! ```

mod availability;
mod engine;
mod policy;

pub use availability::{Collection, Unlimited};
pub use engine::{Resolution, ResolvedEntry, Shortfall, Tier, VersionResolver};
pub use policy::{Availability, ByIdentity, ThenBy, VersionCatalog, VersionOrder, UNLIMITED};
