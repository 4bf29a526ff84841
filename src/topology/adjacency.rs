use std::collections::HashMap;

use super::edge::EdgeKey;
use super::ring::RingCatalogue;
use super::RingIndex;

/// Maps each undirected edge to the rings containing it.
///
/// Built in one pass over the catalogue; bucket entries are in ascending
/// ring-index order because rings are walked in index order. In a
/// well-formed network few rings meet at one edge (rarely more than four),
/// but nothing here relies on that: buckets grow as needed.
#[derive(Debug)]
pub struct RingAdjacencyIndex {
    by_edge: HashMap<EdgeKey, Vec<RingIndex>>,
}

impl RingAdjacencyIndex {
    /// Builds the index from a ring catalogue.
    #[must_use]
    pub fn build(catalogue: &RingCatalogue) -> Self {
        let mut by_edge: HashMap<EdgeKey, Vec<RingIndex>> = HashMap::new();
        for (index, ring) in catalogue.iter() {
            for edge in ring.edges() {
                by_edge.entry(edge).or_default().push(index);
            }
        }
        Self { by_edge }
    }

    /// Returns the rings containing `edge`, ascending by index.
    #[must_use]
    pub fn rings_on(&self, edge: EdgeKey) -> &[RingIndex] {
        self.by_edge.get(&edge).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct edges touched by any ring.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.by_edge.len()
    }
}
