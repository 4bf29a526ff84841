use std::collections::{BTreeMap, VecDeque};

use tracing::warn;

use crate::topology::{Cage, EdgeKey, Ring, RingAdjacencyIndex, RingCatalogue, RingIndex};

/// Lazy enumeration of all distinct cages in a ring catalogue.
///
/// The search grows partial surfaces one ring at a time, tracking how often
/// each touched edge is covered. An edge covered once is *open*; a partial
/// surface with no open edges is a closed cage. Each branch is seeded by one
/// ring and only ever adds rings with a larger index, so a cage is
/// discovered exactly once: in the branch seeded by its smallest member.
///
/// Branches extend through the open edge with the fewest candidate rings;
/// an open edge no remaining ring can close kills the branch outright.
/// Seed order, the ordered cover map, and ascending candidate order make
/// two runs over the same inputs yield the same sequence.
pub struct CageEnumerator<'a> {
    catalogue: &'a RingCatalogue,
    index: &'a RingAdjacencyIndex,
    max_cage_size: usize,
    step_budget: Option<usize>,
    steps: usize,
    truncated: bool,
    next_seed: RingIndex,
    pending: VecDeque<Cage>,
}

impl<'a> CageEnumerator<'a> {
    /// Creates an enumerator over `catalogue` with the given bound on the
    /// number of rings per cage.
    #[must_use]
    pub fn new(
        catalogue: &'a RingCatalogue,
        index: &'a RingAdjacencyIndex,
        max_cage_size: usize,
    ) -> Self {
        Self {
            catalogue,
            index,
            max_cage_size,
            step_budget: None,
            steps: 0,
            truncated: false,
            next_seed: 0,
            pending: VecDeque::new(),
        }
    }

    /// Caps the number of search steps; an exhausted budget truncates the
    /// enumeration instead of failing it.
    #[must_use]
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.step_budget = Some(steps);
        self
    }

    /// `true` once the step budget has cut the search short. Cages yielded
    /// before the cutoff are still a valid (partial) result.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Search steps taken so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn search_seed(&mut self, seed: RingIndex) {
        let Ok(ring) = self.catalogue.ring(seed) else {
            return;
        };
        let mut selected = vec![seed];
        let mut cover = BTreeMap::new();
        apply(&mut cover, ring);
        self.extend(seed, &mut selected, &mut cover);
    }

    fn extend(
        &mut self,
        seed: RingIndex,
        selected: &mut Vec<RingIndex>,
        cover: &mut BTreeMap<EdgeKey, u8>,
    ) {
        if self.out_of_budget() {
            return;
        }
        self.steps += 1;

        // Pick the open edge with the fewest candidates. Any open edge with
        // none makes the boundary unclosable, so the whole branch dies.
        let mut has_open = false;
        let mut best: Vec<RingIndex> = Vec::new();
        for (&edge, &count) in cover.iter() {
            if count != 1 {
                continue;
            }
            let candidates: Vec<RingIndex> = self
                .index
                .rings_on(edge)
                .iter()
                .copied()
                .filter(|&r| r > seed && !selected.contains(&r) && self.fits(r, cover))
                .collect();
            if candidates.is_empty() {
                return;
            }
            if !has_open || candidates.len() < best.len() {
                best = candidates;
            }
            has_open = true;
        }

        if !has_open {
            // Every touched edge is covered twice: a closed surface.
            // Connectivity holds by construction.
            self.pending.push_back(Cage::new(selected.clone()));
            return;
        }
        if selected.len() >= self.max_cage_size {
            return;
        }

        for candidate in best {
            let Ok(ring) = self.catalogue.ring(candidate) else {
                continue;
            };
            selected.push(candidate);
            apply(cover, ring);
            self.extend(seed, selected, cover);
            retract(cover, ring);
            selected.pop();
            if self.truncated {
                return;
            }
        }
    }

    /// `true` if adding `ring` would cover some edge a third time.
    fn fits(&self, ring: RingIndex, cover: &BTreeMap<EdgeKey, u8>) -> bool {
        let Ok(ring) = self.catalogue.ring(ring) else {
            return false;
        };
        ring.edges().all(|edge| cover.get(&edge).copied().unwrap_or(0) < 2)
    }

    fn out_of_budget(&mut self) -> bool {
        if self.truncated {
            return true;
        }
        if let Some(budget) = self.step_budget {
            if self.steps >= budget {
                self.truncated = true;
                warn!(
                    steps = self.steps,
                    "step budget exhausted, cage enumeration truncated"
                );
                return true;
            }
        }
        false
    }
}

fn apply(cover: &mut BTreeMap<EdgeKey, u8>, ring: &Ring) {
    for edge in ring.edges() {
        *cover.entry(edge).or_insert(0) += 1;
    }
}

fn retract(cover: &mut BTreeMap<EdgeKey, u8>, ring: &Ring) {
    for edge in ring.edges() {
        if let Some(count) = cover.get_mut(&edge) {
            *count -= 1;
            if *count == 0 {
                cover.remove(&edge);
            }
        }
    }
}

impl Iterator for CageEnumerator<'_> {
    type Item = Cage;

    fn next(&mut self) -> Option<Cage> {
        loop {
            if let Some(cage) = self.pending.pop_front() {
                return Some(cage);
            }
            if self.truncated || self.next_seed >= self.catalogue.len() {
                return None;
            }
            let seed = self.next_seed;
            self.next_seed += 1;
            self.search_seed(seed);
        }
    }
}
