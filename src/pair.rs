// src/pair.rs
//! Two-field ordered tuple used for every deterministic sort in the crate.

/// An immutable `(first, second)` pair ordered by `first`, ties broken on `second`.
///
/// The derived ordering is lexicographic over the declared field order, which
/// is exactly the total order the selectors rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub const fn first(&self) -> &A {
        &self.first
    }

    #[must_use]
    pub const fn second(&self) -> &B {
        &self.second
    }

    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}
