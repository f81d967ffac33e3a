//! Collaborator contracts consumed by the version resolver.
//!
//! The resolver never looks at catalog storage or collection files. It asks
//! three questions through these traits:
//!
//! - `VersionCatalog`: which versions exist for this card?
//! - `Availability`: how many copies of this version can be used?
//! - `VersionOrder`: which of two versions is preferred?
//!
//! Closures implement `Availability` and `VersionOrder`, which keeps tests
//! and one-off policies short.

use std::cmp::Ordering;

/// Availability reported for versions with no copy limit.
pub const UNLIMITED: u32 = u32::MAX;

/// Source of concrete versions for abstract cards.
///
/// `versions_of` must be a pure function of catalog state: finite, and
/// stable in iteration order across calls. That order is the final
/// tie-break between versions the preference order considers equal.
pub trait VersionCatalog<A> {
    /// Concrete version type produced by the catalog.
    type Version: Ord + Clone;

    /// All known versions of a card. May be empty.
    fn versions_of(&self, card: &A) -> Vec<Self::Version>;
}

/// Number of copies of a version that may be assigned.
pub trait Availability<V> {
    /// Copies available, or `UNLIMITED`.
    fn available(&self, version: &V) -> u32;
}

impl<V, F> Availability<V> for F
where
    F: Fn(&V) -> u32,
{
    fn available(&self, version: &V) -> u32 {
        self(version)
    }
}

/// Ordering over versions. `Less` means "more preferred".
///
/// The resolver requires at least a valid partial order without cycles;
/// this is a precondition and is not checked at runtime.
pub trait VersionOrder<V> {
    /// Compare two versions.
    fn compare(&self, a: &V, b: &V) -> Ordering;

    /// Break ties of this order with `next`.
    fn then_by<O>(self, next: O) -> ThenBy<Self, O>
    where
        Self: Sized,
        O: VersionOrder<V>,
    {
        ThenBy { first: self, next }
    }
}

impl<V, F> VersionOrder<V> for F
where
    F: Fn(&V, &V) -> Ordering,
{
    fn compare(&self, a: &V, b: &V) -> Ordering {
        self(a, b)
    }
}

/// Lexicographic combination of two orders.
#[derive(Clone, Debug)]
pub struct ThenBy<A, B> {
    first: A,
    next: B,
}

impl<V, A, B> VersionOrder<V> for ThenBy<A, B>
where
    A: VersionOrder<V>,
    B: VersionOrder<V>,
{
    fn compare(&self, a: &V, b: &V) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.next.compare(a, b))
    }
}

/// Order by the version's own `Ord`, typically its id.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByIdentity;

impl<V: Ord> VersionOrder<V> for ByIdentity {
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}
