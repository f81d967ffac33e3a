//! Core types: errors, configuration, seeds and the deterministic RNG.
//!
//! Everything here is independent of any particular catalog. Other modules
//! build on these types rather than on each other's internals.

pub mod error;
pub mod rng;
pub mod config;

pub use error::{Error, Result};
pub use rng::{DeckRng, DeckRngState, Seed, StableId};
pub use config::{ConfiguredOrder, PreferenceConfig, ReleasePreference, ResolverConfig};
