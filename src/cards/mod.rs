//! Card system: abstract cards, concrete versions, and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for abstract cards
//! - `CardTypeId`: Opaque type identifier (callers define types)
//! - `Card`: An abstract card, identified by id and displayed by name
//! - `Version`: One concrete printing of a card
//! - `Printing`: Platform-specific data (paper, online, arena)
//! - `CardRegistry`: Card and version lookup, usable as a `VersionCatalog`
//!
//! ## Shared Editions
//!
//! Many versions share one edition. The registry interns editions so each
//! is stored once and handed out as `Arc<Edition>`.

pub mod definition;
pub mod version;
pub mod registry;

pub use definition::{Card, CardId, CardTypeId};
pub use version::{Edition, Finish, Platform, Printed, Printing, Version, VersionId};
pub use registry::CardRegistry;
