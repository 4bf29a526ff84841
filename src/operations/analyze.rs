use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::math::FracPos;
use crate::topology::{NodeId, RingAdjacencyIndex, RingCatalogue};

use super::describe_cage::{CageDescriptor, CageRecord};
use super::enumerate_cages::CageEnumerator;

/// Presentation record for one catalogued ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingRecord {
    /// Cyclic node sequence as reported by the ring collaborator.
    pub nodes: Vec<NodeId>,
    /// Periodic centroid of the member nodes, in `[0,1)³`.
    pub centroid: FracPos,
}

/// Result of one cage analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Every catalogued ring, in index order; cage records refer into this.
    pub rings: Vec<RingRecord>,
    /// Accepted cages, in discovery order.
    pub cages: Vec<CageRecord>,
    /// `false` iff the step budget truncated the search; an empty cage list
    /// with `complete == true` means the structure holds no such cages.
    pub complete: bool,
}

/// Runs the full cage analysis over one graph snapshot.
///
/// `positions` is the host table of fractional node coordinates, indexed by
/// node id. The configuration is threaded through explicitly; nothing here
/// reads ambient state.
///
/// # Panics
///
/// Panics if a catalogued ring names a node outside `positions`.
#[must_use]
pub fn analyze(
    catalogue: &RingCatalogue,
    positions: &[FracPos],
    config: &AnalysisConfig,
) -> AnalysisReport {
    let max_cage_size = config.max_cage_size();
    info!(rings = catalogue.len(), max_cage_size, "cage analysis started");

    let oversized = catalogue
        .iter()
        .filter(|(_, ring)| ring.size() > config.max_ring)
        .count();
    if oversized > 0 {
        warn!(
            oversized,
            max_ring = config.max_ring,
            "catalogue holds rings above the configured maximum ring size"
        );
    }

    let ring_centroids: Vec<FracPos> = catalogue
        .iter()
        .map(|(_, ring)| ring.centroid(positions))
        .collect();

    let index = RingAdjacencyIndex::build(catalogue);
    let mut enumerator = CageEnumerator::new(catalogue, &index, max_cage_size);
    if let Some(budget) = config.step_budget {
        enumerator = enumerator.with_step_budget(budget);
    }

    let descriptor = CageDescriptor::new(&config.sizes, &ring_centroids);
    let mut cages = Vec::new();
    for cage in enumerator.by_ref() {
        debug!(rings = ?cage.rings(), "cage found");
        if let Some(record) = descriptor.describe(&cage) {
            cages.push(record);
        }
    }
    let complete = !enumerator.truncated();
    info!(
        cages = cages.len(),
        steps = enumerator.steps(),
        complete,
        "cage analysis finished"
    );

    let rings = catalogue
        .iter()
        .zip(ring_centroids)
        .map(|((_, ring), centroid)| RingRecord {
            nodes: ring.nodes().to_vec(),
            centroid,
        })
        .collect();

    AnalysisReport {
        rings,
        cages,
        complete,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::topology::RingCatalogue;

    use super::*;

    fn tetrahedron() -> (RingCatalogue, Vec<FracPos>) {
        let catalogue = RingCatalogue::from_cycles(vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 2, 3],
            vec![1, 2, 3],
        ])
        .unwrap();
        let positions = vec![
            FracPos::new(0.40, 0.40, 0.40),
            FracPos::new(0.60, 0.40, 0.40),
            FracPos::new(0.50, 0.60, 0.40),
            FracPos::new(0.50, 0.47, 0.60),
        ];
        (catalogue, positions)
    }

    #[test]
    fn tetrahedron_report_has_one_cage() {
        let (catalogue, positions) = tetrahedron();
        let report = analyze(&catalogue, &positions, &AnalysisConfig::default());
        assert!(report.complete);
        assert_eq!(report.rings.len(), 4);
        assert_eq!(report.cages.len(), 1);
        assert_eq!(report.cages[0].rings, vec![0, 1, 2, 3]);
        // All four nodes cluster mid-cell, so the cage centroid does too.
        assert_relative_eq!(report.cages[0].centroid.x, 0.5, epsilon = 0.05);
        assert_relative_eq!(report.cages[0].centroid.y, 0.47, epsilon = 0.05);
    }

    #[test]
    fn size_filter_drops_cages_outside_the_accepted_set() {
        let (catalogue, positions) = tetrahedron();
        let config = AnalysisConfig::parse("5-6:maxcagesize=6").unwrap();
        let report = analyze(&catalogue, &positions, &config);
        assert!(report.complete);
        assert!(report.cages.is_empty());
    }

    #[test]
    fn bound_below_closing_size_is_a_complete_empty_result() {
        let (catalogue, positions) = tetrahedron();
        let config = AnalysisConfig::default().with_max_cage_size(3);
        let report = analyze(&catalogue, &positions, &config);
        assert!(report.complete);
        assert!(report.cages.is_empty());
    }

    #[test]
    fn exhausted_budget_marks_the_report_incomplete() {
        let (catalogue, positions) = tetrahedron();
        let config = AnalysisConfig::default().with_step_budget(1);
        let report = analyze(&catalogue, &positions, &config);
        assert!(!report.complete);
    }

    #[test]
    fn ring_records_keep_reported_node_order() {
        let (catalogue, positions) = tetrahedron();
        let report = analyze(&catalogue, &positions, &AnalysisConfig::default());
        assert_eq!(report.rings[1].nodes, vec![0, 1, 3]);
    }
}
