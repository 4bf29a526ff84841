use std::collections::BTreeSet;

use crate::math::FracPos;
use crate::topology::{Cage, RingIndex};

/// Presentation record for one accepted cage.
///
/// Plain data, agnostic of any output format; rendering belongs to the
/// presentation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CageRecord {
    /// Constituent ring indices, ascending.
    pub rings: Vec<RingIndex>,
    /// Periodic centroid of the member rings' centroids, in `[0,1)³`.
    pub centroid: FracPos,
}

/// Turns enumerated cages into records, applying the caller's size filter.
pub struct CageDescriptor<'a> {
    sizes: &'a BTreeSet<usize>,
    ring_centroids: &'a [FracPos],
}

impl<'a> CageDescriptor<'a> {
    /// Creates a descriptor over the accepted face counts and the per-ring
    /// centroid table.
    #[must_use]
    pub fn new(sizes: &'a BTreeSet<usize>, ring_centroids: &'a [FracPos]) -> Self {
        Self {
            sizes,
            ring_centroids,
        }
    }

    /// Describes `cage` if its face count is accepted.
    ///
    /// # Panics
    ///
    /// Panics if a member ring index falls outside the centroid table.
    #[must_use]
    pub fn describe(&self, cage: &Cage) -> Option<CageRecord> {
        self.sizes.contains(&cage.size()).then(|| CageRecord {
            rings: cage.rings().to_vec(),
            centroid: cage.centroid(self.ring_centroids),
        })
    }
}
