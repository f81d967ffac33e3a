//! Resolution configuration.
//!
//! Callers describe their preferences as data:
//! - `PreferenceConfig`: ranks platforms, editions, finishes and release age
//! - `ResolverConfig`: preference and overflow rankings plus the seed salt
//!
//! Both are plain serde structs with defaults, so they can be loaded from
//! any serde format. `PreferenceConfig::order` turns the data into a
//! `VersionOrder` usable by the resolver.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Finish, Platform, Printed, Version};
use crate::resolve::VersionOrder;

/// Which end of the release calendar to favor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleasePreference {
    /// Most recent printings first.
    #[default]
    Newest,
    /// Original printings first.
    Oldest,
    /// Release date does not matter.
    Any,
}

/// Ranking of versions, most important criterion first.
///
/// Versions are compared by platform, then edition, then finish, then
/// release date, and finally by version id. Values missing from a list rank
/// after every listed value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Platforms, most preferred first.
    pub platforms: Vec<Platform>,

    /// Edition codes, most preferred first. Compared ignoring case.
    pub editions: Vec<String>,

    /// Finishes, most preferred first.
    pub finishes: Vec<Finish>,

    /// Release date preference, applied after the lists above.
    pub release: ReleasePreference,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            platforms: vec![Platform::Paper, Platform::Online, Platform::Arena],
            editions: Vec::new(),
            finishes: vec![Finish::Nonfoil, Finish::Foil, Finish::Etched, Finish::Glossy],
            release: ReleasePreference::Newest,
        }
    }
}

impl PreferenceConfig {
    /// Set the platform ranking.
    #[must_use]
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    /// Append an edition code to the edition ranking.
    #[must_use]
    pub fn prefer_edition(mut self, code: impl Into<String>) -> Self {
        self.editions.push(code.into());
        self
    }

    /// Set the finish ranking.
    #[must_use]
    pub fn with_finishes(mut self, finishes: impl IntoIterator<Item = Finish>) -> Self {
        self.finishes = finishes.into_iter().collect();
        self
    }

    /// Set the release date preference.
    #[must_use]
    pub fn with_release(mut self, release: ReleasePreference) -> Self {
        self.release = release;
        self
    }

    /// Build the version order described by this configuration.
    #[must_use]
    pub fn order(&self) -> ConfiguredOrder {
        ConfiguredOrder {
            platforms: self.platforms.clone(),
            editions: self
                .editions
                .iter()
                .map(|code| code.to_ascii_lowercase())
                .collect(),
            finishes: self.finishes.clone(),
            release: self.release,
        }
    }
}

/// Strict total order over `Version`s built from a `PreferenceConfig`.
///
/// The final comparison on version id makes ties impossible, so results
/// never depend on catalog iteration order.
#[derive(Clone, Debug)]
pub struct ConfiguredOrder {
    platforms: Vec<Platform>,
    editions: Vec<String>,
    finishes: Vec<Finish>,
    release: ReleasePreference,
}

/// Position in a ranking; unlisted values rank last.
fn rank<T: PartialEq>(list: &[T], value: Option<&T>) -> usize {
    value
        .and_then(|v| list.iter().position(|item| item == v))
        .unwrap_or(list.len())
}

impl ConfiguredOrder {
    fn edition_rank(&self, version: &Version) -> usize {
        let code = version.edition().map(|e| e.code.to_ascii_lowercase());
        rank(&self.editions, code.as_ref())
    }

    fn released(&self, version: &Version) -> u32 {
        version.edition().map_or(0, |e| e.released)
    }
}

impl VersionOrder<Version> for ConfiguredOrder {
    fn compare(&self, a: &Version, b: &Version) -> Ordering {
        let platform = rank(&self.platforms, Some(&a.platform()))
            .cmp(&rank(&self.platforms, Some(&b.platform())));
        let edition = self.edition_rank(a).cmp(&self.edition_rank(b));
        let finish = rank(&self.finishes, a.finish()).cmp(&rank(&self.finishes, b.finish()));
        let release = match self.release {
            ReleasePreference::Newest => self.released(b).cmp(&self.released(a)),
            ReleasePreference::Oldest => self.released(a).cmp(&self.released(b)),
            ReleasePreference::Any => Ordering::Equal,
        };

        platform
            .then(edition)
            .then(finish)
            .then(release)
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Top-level resolution settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ranking used when a choice is free.
    pub preference: PreferenceConfig,

    /// Ranking used to pick an overflow version when nothing is available.
    /// Falls back to `preference` when unset.
    pub overflow: Option<PreferenceConfig>,

    /// Salt mixed into deck seeds for randomized transformations.
    pub salt: i64,
}

impl ResolverConfig {
    /// Set the preference ranking.
    #[must_use]
    pub fn with_preference(mut self, preference: PreferenceConfig) -> Self {
        self.preference = preference;
        self
    }

    /// Set a separate overflow ranking.
    #[must_use]
    pub fn with_overflow(mut self, overflow: PreferenceConfig) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set the seed salt.
    #[must_use]
    pub fn with_salt(mut self, salt: i64) -> Self {
        self.salt = salt;
        self
    }

    /// Order used when a choice is free.
    #[must_use]
    pub fn preference_order(&self) -> ConfiguredOrder {
        self.preference.order()
    }

    /// Order used to pick overflow versions.
    #[must_use]
    pub fn overflow_order(&self) -> ConfiguredOrder {
        self.overflow.as_ref().unwrap_or(&self.preference).order()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardId, Edition, Printing, VersionId};

    fn version(id: u32, code: &str, released: u32, finish: Finish) -> Version {
        Version::paper(
            VersionId::new(id),
            CardId::new(1),
            Arc::new(Edition::new(code, code, released)),
            finish,
            "1",
        )
    }

    fn sorted(order: &ConfiguredOrder, mut versions: Vec<Version>) -> Vec<u32> {
        versions.sort_by(|a, b| order.compare(a, b));
        versions.iter().map(|v| v.id.raw()).collect()
    }

    #[test]
    fn test_default_prefers_newest_nonfoil() {
        let order = PreferenceConfig::default().order();
        let versions = vec![
            version(1, "LEA", 19930805, Finish::Nonfoil),
            version(2, "M10", 20090717, Finish::Foil),
            version(3, "M10", 20090717, Finish::Nonfoil),
        ];

        assert_eq!(sorted(&order, versions), vec![3, 1, 2]);
    }

    #[test]
    fn test_edition_ranking_wins_over_release() {
        let order = PreferenceConfig::default().prefer_edition("lea").order();
        let versions = vec![
            version(1, "M10", 20090717, Finish::Nonfoil),
            version(2, "LEA", 19930805, Finish::Nonfoil),
        ];

        assert_eq!(sorted(&order, versions), vec![2, 1]);
    }

    #[test]
    fn test_oldest_and_platforms() {
        let order = PreferenceConfig::default()
            .with_platforms([Platform::Arena, Platform::Paper])
            .with_release(ReleasePreference::Oldest)
            .order();

        let arena = Version::new(
            VersionId::new(9),
            CardId::new(1),
            Printing::Arena {
                edition: Arc::new(Edition::new("ANA", "Arena", 20180101)),
                arena_id: 1,
            },
        );
        let versions = vec![
            version(1, "M10", 20090717, Finish::Nonfoil),
            version(2, "LEA", 19930805, Finish::Nonfoil),
            arena,
        ];

        assert_eq!(sorted(&order, versions), vec![9, 2, 1]);
    }

    #[test]
    fn test_unrecognized_finish_ranks_last() {
        let order = PreferenceConfig::default().order();
        let versions = vec![
            version(1, "M10", 20090717, Finish::Unrecognized("galaxy".into())),
            version(2, "M10", 20090717, Finish::Glossy),
        ];

        assert_eq!(sorted(&order, versions), vec![2, 1]);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let order = PreferenceConfig::default()
            .with_release(ReleasePreference::Any)
            .order();
        let a = version(5, "M10", 20090717, Finish::Nonfoil);
        let b = version(4, "M10", 20090717, Finish::Nonfoil);

        assert_eq!(order.compare(&a, &b), Ordering::Greater);
        assert_eq!(order.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_resolver_config_from_json() {
        let json = r#"{
            "preference": { "editions": ["M10"], "finishes": ["foil", "nonfoil"] },
            "salt": 99
        }"#;
        let config: ResolverConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.salt, 99);
        assert_eq!(config.preference.editions, vec!["M10".to_string()]);
        assert_eq!(config.preference.finishes, vec![Finish::Foil, Finish::Nonfoil]);
        assert_eq!(config.preference.platforms, PreferenceConfig::default().platforms);
        assert!(config.overflow.is_none());
    }

    #[test]
    fn test_overflow_order_falls_back_to_preference() {
        let foil_first = PreferenceConfig::default().with_finishes([Finish::Foil]);
        let config = ResolverConfig::default()
            .with_preference(foil_first)
            .with_salt(3);

        let foil = version(1, "M10", 20090717, Finish::Foil);
        let plain = version(2, "M10", 20090717, Finish::Nonfoil);
        assert_eq!(config.overflow_order().compare(&foil, &plain), Ordering::Less);

        let config = config.with_overflow(PreferenceConfig::default());
        assert_eq!(config.overflow_order().compare(&foil, &plain), Ordering::Greater);
        assert_eq!(config.preference_order().compare(&foil, &plain), Ordering::Less);
    }
}
