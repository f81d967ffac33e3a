//! Deck sections.
//!
//! A card in a decklist occupies exactly one of a small, fixed set of
//! sections. The declaration order of `Section` is the priority order used
//! during version resolution: the most restrictive section comes first, so
//! a commander is matched before the 99 cards of the main deck.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// Named compartment of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Commander zone (singleton formats).
    Commander,
    /// Companion, kept outside the game.
    Companion,
    /// Main deck.
    Main,
    /// Sideboard.
    Sideboard,
}

impl Section {
    /// All sections, in priority order.
    pub const ALL: [Section; 4] = [
        Section::Commander,
        Section::Companion,
        Section::Main,
        Section::Sideboard,
    ];

    /// Resolution priority. Lower values are resolved first.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Section::Commander => 0,
            Section::Companion => 1,
            Section::Main => 2,
            Section::Sideboard => 3,
        }
    }

    /// Label used by export formats when no other name is configured.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Section::Commander => "Commander",
            Section::Companion => "Companion",
            Section::Main => "Deck",
            Section::Sideboard => "Sideboard",
        }
    }

    /// Parse a section from a label, ignoring case.
    ///
    /// Accepts the default labels plus the common aliases
    /// `main`, `maindeck` and `side`.
    pub fn from_label(label: &str) -> Result<Self, Error> {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "commander" => Ok(Section::Commander),
            "companion" => Ok(Section::Companion),
            "deck" | "main" | "maindeck" | "main deck" => Ok(Section::Main),
            "sideboard" | "side" => Ok(Section::Sideboard),
            _ => Err(Error::UnknownSection(label.to_string())),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_label())
    }
}

impl std::str::FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matches_ord() {
        for pair in Section::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Section::from_label("Commander").unwrap(), Section::Commander);
        assert_eq!(Section::from_label(" main ").unwrap(), Section::Main);
        assert_eq!(Section::from_label("Deck").unwrap(), Section::Main);
        assert_eq!("SIDE".parse::<Section>().unwrap(), Section::Sideboard);
    }

    #[test]
    fn test_unknown_label() {
        let err = Section::from_label("attractions").unwrap_err();
        assert_eq!(err, Error::UnknownSection("attractions".to_string()));
    }

    #[test]
    fn test_display_uses_default_label() {
        assert_eq!(Section::Main.to_string(), "Deck");
        assert_eq!(Section::Sideboard.to_string(), "Sideboard");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Section::Companion).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::Companion);
    }
}
