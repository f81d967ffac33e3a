//! Card registry: abstract cards, their versions and interned editions.
//!
//! The `CardRegistry` is the in-memory catalog. Once built it is read-only
//! and can be shared freely between threads; it implements
//! `VersionCatalog` for both `Card` and `CardId`.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{Card, CardId, CardTypeId};
use super::version::{Edition, Printing, Version, VersionId};
use crate::resolve::VersionCatalog;

/// Registry of abstract cards and their concrete versions.
///
/// Versions are kept in registration order; that order is what
/// `versions_of` returns.
///
/// ## Example
///
/// ```
/// use ccg_decklist::cards::{CardRegistry, CardTypeId, Edition, Finish, Printing};
/// use ccg_decklist::resolve::VersionCatalog;
///
/// let mut registry = CardRegistry::new();
/// let forest = registry.register_auto("Forest", CardTypeId::new(0));
///
/// let lea = Edition::new("LEA", "Limited Edition Alpha", 19930805);
/// registry.add_version(forest, Printing::Paper {
///     edition: lea.into(),
///     finish: Finish::Nonfoil,
///     collector_number: "294".into(),
/// });
///
/// assert_eq!(registry.get_by_name("forest").unwrap().id, forest);
/// assert_eq!(registry.versions_of(&forest).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    names: FxHashMap<String, CardId>,
    versions: FxHashMap<CardId, Vec<Version>>,
    version_cards: FxHashMap<VersionId, CardId>,
    editions: FxHashSet<Arc<Edition>>,
    next_id: u32,
    next_version_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an abstract card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.0.saturating_add(1));
        self.names.insert(card.name.to_lowercase(), card.id);
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<Arc<str>>, card_type: CardTypeId) -> CardId {
        let id = CardId::new(self.next_id);
        self.register(Card::new(id, name, card_type));
        id
    }

    /// Intern an edition.
    ///
    /// Returns the shared copy of a structurally equal edition if one was
    /// seen before. The cache only ever grows and never changes equality.
    pub fn intern_edition(&mut self, edition: impl Into<Arc<Edition>>) -> Arc<Edition> {
        let edition = edition.into();
        if let Some(existing) = self.editions.get(&*edition) {
            return Arc::clone(existing);
        }
        self.editions.insert(Arc::clone(&edition));
        edition
    }

    /// Register a concrete version with an explicit ID.
    ///
    /// Panics if the card is unknown or the version ID is taken.
    pub fn register_version(&mut self, version: Version) {
        if !self.cards.contains_key(&version.card) {
            panic!("Card with ID {:?} is not registered", version.card);
        }
        if self.version_cards.contains_key(&version.id) {
            panic!("Version with ID {:?} already registered", version.id);
        }

        let edition = self.intern_edition(Arc::clone(version.printing.edition_arc()));
        let version = Version {
            printing: version.printing.with_edition(edition),
            ..version
        };

        self.next_version_id = self.next_version_id.max(version.id.0.saturating_add(1));
        self.version_cards.insert(version.id, version.card);
        self.versions.entry(version.card).or_default().push(version);
    }

    /// Add a version with an auto-assigned ID.
    ///
    /// Returns the assigned ID. Panics if the card is unknown.
    pub fn add_version(&mut self, card: CardId, printing: Printing) -> VersionId {
        let id = VersionId::new(self.next_version_id);
        self.register_version(Version::new(id, card, printing));
        id
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Look a card up by name, ignoring case.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Card> {
        self.names
            .get(&name.to_lowercase())
            .and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Versions of a card, in registration order.
    #[must_use]
    pub fn versions(&self, card: CardId) -> &[Version] {
        self.versions.get(&card).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get a version by ID.
    #[must_use]
    pub fn version(&self, id: VersionId) -> Option<&Version> {
        let card = self.version_cards.get(&id)?;
        self.versions(*card).iter().find(|v| v.id == id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of distinct editions interned so far.
    #[must_use]
    pub fn edition_count(&self) -> usize {
        self.editions.len()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardTypeId) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }
}

impl VersionCatalog<CardId> for CardRegistry {
    type Version = Version;

    fn versions_of(&self, card: &CardId) -> Vec<Version> {
        self.versions(*card).to_vec()
    }
}

impl VersionCatalog<Card> for CardRegistry {
    type Version = Version;

    fn versions_of(&self, card: &Card) -> Vec<Version> {
        self.versions(card.id).to_vec()
    }
}
