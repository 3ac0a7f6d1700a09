use bitvec::prelude::*;
use std::fmt;

use crate::spatial::tiles::Edge;

type EdgeBits = BitArr!(for 4, in u8, Lsb0);

/// Fixed-size set of tile edges
///
/// Iteration always follows the clockwise edge order (top, right, bottom, left), which
/// keeps random choices over a set reproducible for a given seed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSet {
    bits: EdgeBits,
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            bits: EdgeBits::ZERO,
        }
    }

    /// Create a set containing all four edges
    pub fn all() -> Self {
        Edge::ALL.into_iter().collect()
    }

    /// Add an edge
    pub fn insert(&mut self, edge: Edge) {
        self.bits.set(edge.index(), true);
    }

    /// Remove an edge, returning whether it was present
    pub fn remove(&mut self, edge: Edge) -> bool {
        let present = self.contains(edge);
        self.bits.set(edge.index(), false);
        present
    }

    /// Test edge membership
    pub fn contains(&self, edge: Edge) -> bool {
        self.bits.get(edge.index()).as_deref() == Some(&true)
    }

    /// Number of edges present
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no edges are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Create a new set containing the edges of both
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = *self;
        for edge in other.iter() {
            result.insert(edge);
        }
        result
    }

    /// Whether every edge of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|edge| other.contains(edge))
    }

    /// Iterate present edges in clockwise order
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.bits.iter_ones().filter_map(Edge::from_index)
    }

    /// Extract present edges in clockwise order
    pub fn to_vec(&self) -> Vec<Edge> {
        self.iter().collect()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = Self::new();
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

impl fmt::Debug for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
