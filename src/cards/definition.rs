//! Abstract cards - printing-independent card identities.
//!
//! `Card` identifies a card regardless of how it was printed. "Lightning
//! Bolt" is one abstract card with dozens of concrete versions; the versions
//! live in `super::version`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::rng::StableId;

/// Unique identifier for an abstract card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl StableId for CardId {
    fn stable_id(&self) -> u64 {
        u64::from(self.0)
    }
}

/// Card type identifier - catalogs define their own types.
///
/// Opaque to the resolver. Catalogs use it to tag basic lands, tokens and
/// the like so transformation hooks can select them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    /// Create a new card type ID.
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

/// Abstract card.
///
/// Equality, ordering and hashing use only the `id`; the name is carried for
/// display and error messages. Cloning is cheap.
///
/// ## Example
///
/// ```
/// use ccg_decklist::cards::{Card, CardId, CardTypeId};
///
/// let bolt = Card::new(CardId::new(1), "Lightning Bolt", CardTypeId::new(0));
/// assert_eq!(bolt.to_string(), "Lightning Bolt");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name.
    pub name: Arc<str>,

    /// Card type (catalog-specific, opaque to the resolver).
    pub card_type: CardTypeId,
}

impl Card {
    /// Create a new abstract card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<Arc<str>>, card_type: CardTypeId) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl StableId for Card {
    fn stable_id(&self) -> u64 {
        self.id.stable_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_type_id() {
        let id = CardTypeId::new(1);
        assert_eq!(id.raw(), 1);
    }

    #[test]
    fn test_identity_is_id_only() {
        let a = Card::new(CardId::new(1), "Forest", CardTypeId::new(0));
        let renamed = Card::new(CardId::new(1), "Forêt", CardTypeId::new(0));
        let other = Card::new(CardId::new(2), "Forest", CardTypeId::new(0));

        assert_eq!(a, renamed);
        assert_ne!(a, other);
        assert!(a < other);
        assert_eq!(a.stable_id(), renamed.stable_id());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(1), "Test", CardTypeId::new(0));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card.id, deserialized.id);
        assert_eq!(card.name, deserialized.name);
    }
}
