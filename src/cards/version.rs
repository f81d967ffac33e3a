//! Concrete versions - specific printings of an abstract card.
//!
//! Every printing platform (paper, online client, arena client) carries a
//! slightly different set of attributes. Rather than a type hierarchy, a
//! `Printing` is a tagged enum and the shared capabilities are exposed
//! through the `Printed` trait.
//!
//! ## Finishes
//!
//! The upstream data regularly grows new finish names. `Finish` is a closed
//! enum for the known tokens plus `Unrecognized` carrying the raw string, so
//! parsing never fails and unknown finishes survive a round trip.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::definition::CardId;
use crate::core::rng::StableId;

/// Unique identifier for a concrete version.
///
/// Independent of the `CardId` of the card it prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionId(pub u32);

impl VersionId {
    /// Create a new version ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Version({})", self.0)
    }
}

/// Platform a version was printed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Physical cardboard.
    Paper,
    /// Online client.
    Online,
    /// Arena client.
    Arena,
}

/// Surface finish of a printing.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finish {
    /// Regular, non-foil.
    Nonfoil,
    /// Traditional foil.
    Foil,
    /// Etched foil.
    Etched,
    /// Glossy.
    Glossy,
    /// A finish token this crate does not know, kept verbatim.
    Unrecognized(String),
}

impl Finish {
    /// Parse a finish token. Unknown tokens become `Unrecognized`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "nonfoil" | "normal" => Finish::Nonfoil,
            "foil" => Finish::Foil,
            "etched" => Finish::Etched,
            "glossy" => Finish::Glossy,
            _ => Finish::Unrecognized(token.to_string()),
        }
    }

    /// Canonical token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Finish::Nonfoil => "nonfoil",
            Finish::Foil => "foil",
            Finish::Etched => "etched",
            Finish::Glossy => "glossy",
            Finish::Unrecognized(raw) => raw,
        }
    }

    /// Check if this is a foil-like finish.
    #[must_use]
    pub fn is_foil(&self) -> bool {
        matches!(self, Finish::Foil | Finish::Etched)
    }
}

impl std::str::FromStr for Finish {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Finish::parse(s))
    }
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Finish {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Finish {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Finish::parse(&token))
    }
}

/// A set release.
///
/// Compared structurally; the registry interns equal editions so printings
/// of the same set share one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edition {
    /// Set code, e.g. "LEA".
    pub code: Arc<str>,
    /// Set name.
    pub name: Arc<str>,
    /// Release date as `YYYYMMDD`.
    pub released: u32,
}

impl Edition {
    /// Create a new edition.
    #[must_use]
    pub fn new(code: impl Into<Arc<str>>, name: impl Into<Arc<str>>, released: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            released,
        }
    }
}

/// Platform-specific printing attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Printing {
    /// Physical printing.
    Paper {
        /// Set the card was printed in.
        edition: Arc<Edition>,
        /// Surface finish.
        finish: Finish,
        /// Collector number within the set.
        collector_number: Arc<str>,
    },
    /// Online client printing.
    Online {
        /// Set the card was released in.
        edition: Arc<Edition>,
        /// Surface finish.
        finish: Finish,
        /// Client catalog id.
        catalog_id: u32,
    },
    /// Arena client printing. Arena has no finishes.
    Arena {
        /// Set the card was released in.
        edition: Arc<Edition>,
        /// Client catalog id.
        arena_id: u32,
    },
}

impl Printing {
    /// Replace the edition, keeping every other attribute.
    #[must_use]
    pub(crate) fn with_edition(self, edition: Arc<Edition>) -> Self {
        match self {
            Printing::Paper {
                finish,
                collector_number,
                ..
            } => Printing::Paper {
                edition,
                finish,
                collector_number,
            },
            Printing::Online {
                finish, catalog_id, ..
            } => Printing::Online {
                edition,
                finish,
                catalog_id,
            },
            Printing::Arena { arena_id, .. } => Printing::Arena { edition, arena_id },
        }
    }

    pub(crate) fn edition_arc(&self) -> &Arc<Edition> {
        match self {
            Printing::Paper { edition, .. }
            | Printing::Online { edition, .. }
            | Printing::Arena { edition, .. } => edition,
        }
    }
}

/// Capabilities shared by every kind of printing.
pub trait Printed {
    /// Platform of the printing.
    fn platform(&self) -> Platform;

    /// Edition, if the printing belongs to one.
    fn edition(&self) -> Option<&Edition>;

    /// Finish, if the platform has finishes.
    fn finish(&self) -> Option<&Finish>;
}

impl Printed for Printing {
    fn platform(&self) -> Platform {
        match self {
            Printing::Paper { .. } => Platform::Paper,
            Printing::Online { .. } => Platform::Online,
            Printing::Arena { .. } => Platform::Arena,
        }
    }

    fn edition(&self) -> Option<&Edition> {
        Some(self.edition_arc())
    }

    fn finish(&self) -> Option<&Finish> {
        match self {
            Printing::Paper { finish, .. } | Printing::Online { finish, .. } => Some(finish),
            Printing::Arena { .. } => None,
        }
    }
}

/// A concrete version of an abstract card.
///
/// Equality, ordering and hashing use only the version `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Version {
    /// Unique identifier for this version.
    pub id: VersionId,

    /// The abstract card this version prints.
    pub card: CardId,

    /// Platform-specific attributes.
    pub printing: Printing,
}

impl Version {
    /// Create a new version.
    #[must_use]
    pub fn new(id: VersionId, card: CardId, printing: Printing) -> Self {
        Self { id, card, printing }
    }

    /// Paper printing shorthand.
    #[must_use]
    pub fn paper(
        id: VersionId,
        card: CardId,
        edition: Arc<Edition>,
        finish: Finish,
        collector_number: impl Into<Arc<str>>,
    ) -> Self {
        Self::new(
            id,
            card,
            Printing::Paper {
                edition,
                finish,
                collector_number: collector_number.into(),
            },
        )
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Printed for Version {
    fn platform(&self) -> Platform {
        self.printing.platform()
    }

    fn edition(&self) -> Option<&Edition> {
        self.printing.edition()
    }

    fn finish(&self) -> Option<&Finish> {
        self.printing.finish()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edition = self.printing.edition_arc();
        match &self.printing {
            Printing::Paper {
                finish,
                collector_number,
                ..
            } => write!(f, "{} {} ({})", edition.code, collector_number, finish),
            Printing::Online { finish, .. } => write!(f, "{} online ({})", edition.code, finish),
            Printing::Arena { .. } => write!(f, "{} arena", edition.code),
        }
    }
}

impl StableId for Version {
    fn stable_id(&self) -> u64 {
        u64::from(self.id.0)
    }
}
