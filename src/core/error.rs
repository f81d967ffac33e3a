//! Error types.
//!
//! Only catalog-integrity faults escape version resolution. Shortages of
//! available copies are absorbed by the resolver's fallback tiers and never
//! surface here.

use thiserror::Error;

use crate::deck::Section;

/// Result type alias for decklist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the decklist crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The catalog knows no versions at all for a card, so no fallback
    /// version can be chosen.
    #[error("cannot resolve card {card}: the catalog has no versions for it")]
    UnresolvableCard {
        /// Display name of the offending card.
        card: String,
    },

    /// A serialized deck listed a card with a count of zero.
    #[error("zero count for a card in section {section}")]
    ZeroCount {
        /// Section holding the zero-count card.
        section: Section,
    },

    /// A section label did not match any known section.
    #[error("unknown deck section: {0:?}")]
    UnknownSection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_card_names_card() {
        let err = Error::UnresolvableCard {
            card: "Ghost Card".to_string(),
        };
        assert!(err.to_string().contains("Ghost Card"));
    }

    #[test]
    fn test_zero_count_names_section() {
        let err = Error::ZeroCount {
            section: Section::Sideboard,
        };
        assert_eq!(err.to_string(), "zero count for a card in section Sideboard");
    }
}
