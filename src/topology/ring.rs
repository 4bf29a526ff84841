use std::collections::{HashMap, HashSet};

use crate::error::TopologyError;
use crate::math::{periodic_centroid, FracPos};

use super::edge::EdgeKey;
use super::{NodeId, RingIndex};

/// A minimal cycle in the connectivity graph.
///
/// Stored as the ordered cyclic node sequence reported by the ring
/// enumeration collaborator. The sequence is validated on construction and
/// immutable afterwards; rotation and traversal direction carry no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    nodes: Vec<NodeId>,
}

impl Ring {
    /// Creates a ring from its cyclic node sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence has fewer than three nodes or
    /// repeats a node.
    pub fn new(nodes: Vec<NodeId>) -> Result<Self, TopologyError> {
        if nodes.len() < 3 {
            return Err(TopologyError::RingTooShort(nodes.len()));
        }
        let mut seen = HashSet::with_capacity(nodes.len());
        for &node in &nodes {
            if !seen.insert(node) {
                return Err(TopologyError::RepeatedNode(node));
            }
        }
        Ok(Self { nodes })
    }

    /// Returns the cyclic node sequence.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes (equivalently, edges) in the cycle.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates the edges of the cycle, consecutive pairs plus the
    /// wraparound pair closing it.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        let n = self.nodes.len();
        (0..n).map(move |i| EdgeKey::new(self.nodes[i], self.nodes[(i + 1) % n]))
    }

    /// Periodic centroid of the member nodes.
    ///
    /// # Panics
    ///
    /// Panics if a node id falls outside the positions table.
    #[must_use]
    pub fn centroid(&self, positions: &[FracPos]) -> FracPos {
        periodic_centroid(&self.nodes, |&node| positions[node])
    }

    /// Canonical form of the cycle: the lexicographically smallest among all
    /// rotations of the sequence and of its reversal. Two reports of the
    /// same cycle share one canonical form.
    fn canonical(&self) -> Vec<NodeId> {
        let n = self.nodes.len();
        let start = self
            .nodes
            .iter()
            .enumerate()
            .min_by_key(|(_, &node)| node)
            .map_or(0, |(i, _)| i);
        let forward: Vec<NodeId> = (0..n).map(|i| self.nodes[(start + i) % n]).collect();
        let backward: Vec<NodeId> = (0..n).map(|i| self.nodes[(start + n - i) % n]).collect();
        if forward <= backward {
            forward
        } else {
            backward
        }
    }
}

/// Read-only, index-addressed store of the rings of one analysis run.
///
/// Insertion canonicalizes each cycle, so a ring re-reported under a
/// different rotation or direction maps back to its existing index instead
/// of creating a duplicate entry.
#[derive(Debug, Default)]
pub struct RingCatalogue {
    rings: Vec<Ring>,
    by_canonical: HashMap<Vec<NodeId>, RingIndex>,
}

impl RingCatalogue {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from raw node sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if any sequence is not a valid ring.
    pub fn from_cycles<I>(cycles: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = Vec<NodeId>>,
    {
        let mut catalogue = Self::new();
        for nodes in cycles {
            catalogue.insert(Ring::new(nodes)?);
        }
        Ok(catalogue)
    }

    /// Inserts a ring, returning its index.
    ///
    /// A cycle already present (under any rotation/direction) is not stored
    /// again; its existing index is returned.
    pub fn insert(&mut self, ring: Ring) -> RingIndex {
        let key = ring.canonical();
        if let Some(&index) = self.by_canonical.get(&key) {
            return index;
        }
        let index = self.rings.len();
        self.by_canonical.insert(key, index);
        self.rings.push(ring);
        index
    }

    /// Returns the ring at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not in the catalogue.
    pub fn ring(&self, index: RingIndex) -> Result<&Ring, TopologyError> {
        self.rings
            .get(index)
            .ok_or(TopologyError::RingNotFound(index))
    }

    /// Number of distinct rings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// `true` if the catalogue holds no rings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Iterates rings in index order.
    pub fn iter(&self) -> impl Iterator<Item = (RingIndex, &Ring)> {
        self.rings.iter().enumerate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ring(nodes: &[NodeId]) -> Ring {
        Ring::new(nodes.to_vec()).unwrap()
    }

    // ── Ring validation ──

    #[test]
    fn ring_needs_three_nodes() {
        assert!(matches!(
            Ring::new(vec![1, 2]),
            Err(TopologyError::RingTooShort(2))
        ));
    }

    #[test]
    fn ring_rejects_repeated_node() {
        assert!(matches!(
            Ring::new(vec![1, 2, 3, 2]),
            Err(TopologyError::RepeatedNode(2))
        ));
    }

    // ── edges ──

    #[test]
    fn edges_include_wraparound_pair() {
        let edges: Vec<EdgeKey> = ring(&[5, 1, 3]).edges().collect();
        assert_eq!(
            edges,
            vec![EdgeKey::new(1, 5), EdgeKey::new(1, 3), EdgeKey::new(3, 5)]
        );
    }

    #[test]
    fn ring_of_size_k_has_k_edges() {
        assert_eq!(ring(&[0, 1, 2, 3, 4]).edges().count(), 5);
    }

    // ── centroid ──

    #[test]
    fn centroid_ignores_rotation_of_node_order() {
        let positions = vec![
            FracPos::new(0.95, 0.02, 0.50),
            FracPos::new(0.02, 0.05, 0.52),
            FracPos::new(0.98, 0.98, 0.48),
        ];
        let a = ring(&[0, 1, 2]).centroid(&positions);
        let b = ring(&[1, 2, 0]).centroid(&positions);
        assert_relative_eq!(
            crate::math::min_image(a - b).norm(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn centroid_near_boundary_stays_near_boundary() {
        let positions = vec![
            FracPos::new(0.95, 0.5, 0.5),
            FracPos::new(0.02, 0.5, 0.5),
            FracPos::new(0.99, 0.5, 0.5),
        ];
        let com = ring(&[0, 1, 2]).centroid(&positions);
        assert!(com.x > 0.9 || com.x < 0.1, "centroid {com} drifted off the boundary");
    }

    // ── catalogue deduplication ──

    #[test]
    fn rotated_and_reversed_cycles_share_an_index() {
        let mut catalogue = RingCatalogue::new();
        let first = catalogue.insert(ring(&[1, 2, 3, 4]));
        assert_eq!(catalogue.insert(ring(&[3, 4, 1, 2])), first);
        assert_eq!(catalogue.insert(ring(&[4, 3, 2, 1])), first);
        assert_eq!(catalogue.len(), 1);
    }

    #[test]
    fn distinct_cycles_get_distinct_indices() {
        let mut catalogue = RingCatalogue::new();
        let a = catalogue.insert(ring(&[1, 2, 3, 4]));
        // Same node set, different edge set.
        let b = catalogue.insert(ring(&[1, 2, 4, 3]));
        assert_ne!(a, b);
        assert_eq!(catalogue.len(), 2);
    }

    #[test]
    fn missing_index_is_an_error() {
        let catalogue = RingCatalogue::new();
        assert!(matches!(
            catalogue.ring(0),
            Err(TopologyError::RingNotFound(0))
        ));
    }
}
