//! Deterministic random selection keyed by deck content.
//!
//! Deck transformations sometimes need an arbitrary but stable choice, such
//! as spreading twenty basic lands across several acceptable printings.
//! The choice must be reproducible: the same deck with the same salt always
//! yields the same result, regardless of process, platform or run.
//!
//! ## Key Features
//!
//! - **Content-derived**: `Seed::from_deck` hashes the deck's sorted
//!   (identity, count) pairs with SHA-256, never memory addresses
//! - **Narrowable**: `Seed::narrow` derives an independent-looking seed per card
//! - **Unbiased**: `DeckRng::below` rejects draws that would introduce modulo bias
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use ccg_decklist::core::{DeckRng, Seed};
//! use ccg_decklist::deck::{Deck, Section};
//!
//! let deck: Deck<u32> = [(Section::Main, 17, 20)].into_iter().collect();
//! let seed = Seed::from_deck(&deck, 0x5eed);
//!
//! // Same content and salt, same seed
//! assert_eq!(seed, Seed::from_deck(&deck.clone(), 0x5eed));
//!
//! // Per-card streams are reproducible
//! let mut a = DeckRng::new(seed.narrow(17));
//! let mut b = DeckRng::new(seed.narrow(17));
//! assert_eq!(a.below(10), b.below(10));
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::deck::Deck;

/// Stable identity of a card, independent of where it lives in memory.
///
/// Used to derive deck seeds. Two cards that compare equal must report the
/// same identity.
pub trait StableId {
    /// Get the stable identity.
    fn stable_id(&self) -> u64;
}

impl StableId for u32 {
    fn stable_id(&self) -> u64 {
        u64::from(*self)
    }
}

impl StableId for u64 {
    fn stable_id(&self) -> u64 {
        *self
    }
}

impl StableId for str {
    fn stable_id(&self) -> u64 {
        digest_u64(&[self.as_bytes()])
    }
}

impl StableId for String {
    fn stable_id(&self) -> u64 {
        self.as_str().stable_id()
    }
}

impl<T: StableId + ?Sized> StableId for &T {
    fn stable_id(&self) -> u64 {
        (**self).stable_id()
    }
}

/// SHA-256 over the parts, truncated to the first 8 bytes (little-endian).
fn digest_u64(parts: &[&[u8]]) -> u64 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    finish_u64(hasher)
}

/// First eight bytes of the digest, little-endian.
fn finish_u64(hasher: Sha256) -> u64 {
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Reproducible 64-bit seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u64);

impl Seed {
    /// Create a seed from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw seed value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Derive a seed from deck content and a caller-supplied salt.
    ///
    /// Every section contributes its priority and its (identity, count)
    /// pairs sorted by identity, so the seed depends only on what the deck
    /// contains.
    #[must_use]
    pub fn from_deck<C>(deck: &Deck<C>, salt: i64) -> Self
    where
        C: Ord + Clone + StableId,
    {
        let mut hasher = Sha256::new();
        for (section, cards) in deck.sections() {
            let mut pairs: Vec<(u64, u32)> = cards
                .iter()
                .map(|(card, count)| (card.stable_id(), *count))
                .collect();
            pairs.sort_unstable();

            hasher.update([section.priority()]);
            hasher.update((pairs.len() as u64).to_le_bytes());
            for (id, count) in pairs {
                hasher.update(id.to_le_bytes());
                hasher.update(count.to_le_bytes());
            }
        }
        hasher.update(salt.to_le_bytes());
        Self(finish_u64(hasher))
    }

    /// Narrow the seed to one card.
    ///
    /// Different identities give unrelated seeds; the same (seed, identity)
    /// pair always gives the same result.
    #[must_use]
    pub fn narrow(self, identity: u64) -> Self {
        Self(digest_u64(&[
            b"narrow".as_slice(),
            &self.0.to_le_bytes()[..],
            &identity.to_le_bytes()[..],
        ]))
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed({:#018x})", self.0)
    }
}

/// Deterministic RNG for deck transformations.
///
/// Uses ChaCha8 for speed while keeping high quality output. Never seeded
/// from wall-clock time or host entropy.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: Seed,
}

impl DeckRng {
    /// Create an RNG from a seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed.0),
            seed,
        }
    }

    /// Create an RNG seeded from deck content and salt.
    #[must_use]
    pub fn from_deck<C>(deck: &Deck<C>, salt: i64) -> Self
    where
        C: Ord + Clone + StableId,
    {
        Self::new(Seed::from_deck(deck, salt))
    }

    /// Independent stream for one card.
    ///
    /// Derived from the original seed, so the result does not depend on how
    /// many values this RNG has already produced.
    #[must_use]
    pub fn for_card(&self, identity: u64) -> Self {
        Self::new(self.seed.narrow(identity))
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Draws below `2^64 mod bound` are rejected and redrawn, so every
    /// result is equally likely.
    ///
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "DeckRng::below called with a zero bound");

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let draw = self.inner.next_u64();
            if draw >= threshold {
                return draw % bound;
            }
        }
    }

    /// Uniform index in `[0, len)`, or `None` if `len` is zero.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.below(len as u64) as usize)
        }
    }

    /// Choose one element of a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        self.choose_index(slice.len()).map(|i| &slice[i])
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed.0);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1) no
/// matter how many values were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Seed the RNG was created from
    pub seed: Seed,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Section;

    fn deck(cards: &[(Section, u32, u32)]) -> Deck<u32> {
        cards.iter().copied().collect()
    }

    #[test]
    fn test_empty_deck_seed_hashes_salt_only() {
        let salt = 7i64.to_le_bytes();
        let expected = Seed(digest_u64(&[&salt]));
        assert_eq!(Seed::from_deck(&Deck::<u32>::new(), 7), expected);
    }

    #[test]
    fn test_seed_depends_on_content_only() {
        let a = deck(&[(Section::Main, 1, 4), (Section::Main, 2, 3)]);
        let b = deck(&[(Section::Main, 2, 3), (Section::Main, 1, 4)]);

        assert_eq!(Seed::from_deck(&a, 7), Seed::from_deck(&b, 7));
    }

    #[test]
    fn test_seed_changes_with_content() {
        let a = deck(&[(Section::Main, 1, 4)]);
        let b = deck(&[(Section::Main, 1, 3)]);
        let c = deck(&[(Section::Sideboard, 1, 4)]);

        let seeds = [
            Seed::from_deck(&a, 7),
            Seed::from_deck(&b, 7),
            Seed::from_deck(&c, 7),
        ];
        assert_ne!(seeds[0], seeds[1]);
        assert_ne!(seeds[0], seeds[2]);
        assert_ne!(seeds[1], seeds[2]);
    }

    #[test]
    fn test_seed_changes_with_salt() {
        let a = deck(&[(Section::Main, 1, 4)]);
        assert_ne!(Seed::from_deck(&a, 1), Seed::from_deck(&a, 2));
    }

    #[test]
    fn test_narrow() {
        let seed = Seed::new(42);
        assert_eq!(seed.narrow(1), seed.narrow(1));
        assert_ne!(seed.narrow(1), seed.narrow(2));
        assert_ne!(seed.narrow(1), seed);
    }

    #[test]
    fn test_string_identity() {
        assert_eq!("Forest".stable_id(), "Forest".to_string().stable_id());
        assert_ne!("Forest".stable_id(), "Island".stable_id());
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(Seed::new(42));
        let mut rng2 = DeckRng::new(Seed::new(42));

        for _ in 0..100 {
            assert_eq!(rng1.below(1000), rng2.below(1000));
        }
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = DeckRng::new(Seed::new(3));
        for bound in [1u64, 2, 3, 7, 1000, u64::MAX / 3 + 1, u64::MAX] {
            for _ in 0..200 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_below_is_roughly_uniform() {
        let mut rng = DeckRng::new(Seed::new(11));
        let mut buckets = [0u32; 6];
        let draws = 60_000;
        for _ in 0..draws {
            buckets[rng.below(6) as usize] += 1;
        }

        let expected = draws / 6;
        for count in buckets {
            assert!(count.abs_diff(expected) < expected / 10, "bucket {count}");
        }
    }

    #[test]
    #[should_panic(expected = "zero bound")]
    fn test_below_zero_panics() {
        DeckRng::new(Seed::new(1)).below(0);
    }

    #[test]
    fn test_choose() {
        let mut rng = DeckRng::new(Seed::new(42));
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose_index(0), None);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = DeckRng::new(Seed::new(42));
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (overwhelmingly likely for 20 items)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_reproducible() {
        let mut a: Vec<u32> = (0..10).collect();
        let mut b = a.clone();

        DeckRng::new(Seed::new(9)).shuffle(&mut a);
        DeckRng::new(Seed::new(9)).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_for_card_ignores_consumption() {
        let mut rng = DeckRng::new(Seed::new(5));
        let before = rng.for_card(17).below(1_000_000);
        for _ in 0..10 {
            rng.next_u64();
        }
        let after = rng.for_card(17).below(1_000_000);
        assert_eq!(before, after);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DeckRng::new(Seed::new(42));
        for _ in 0..100 {
            rng.below(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.below(1000)).collect();

        let mut restored = DeckRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.below(1000)).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = DeckRngState {
            seed: Seed::new(42),
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DeckRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
