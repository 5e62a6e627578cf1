//! Cycle patching for infeasible sequential picks.
//!
//! An infeasible pick splits the tour into several cycles. The patcher takes
//! the cycle with the fewest elements, removes one more edge inside it and
//! keeps removing edges in the other cycles, joining each to the cycle built
//! so far, until a single tour remains. The result removes more than `k`
//! edges.

use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use tourforge_core::domain::ListVariableSolution;
use tourforge_scoring::ScoreDirector;

use super::picker::KOptPicker;
use crate::heuristic::r#move::{KOptCycle, KOptDescriptor};

// State shared by every level of the patch search.
struct PatchSearch<'d, E> {
    original: &'d KOptDescriptor<E>,
    current_cycle: usize,
    k: usize,
}

impl<S, D, R> KOptPicker<'_, S, D, R>
where
    S: ListVariableSolution,
    D: ScoreDirector<S> + ?Sized,
    R: Rng,
{
    /// Tries to turn an infeasible descriptor into a feasible one by
    /// removing extra edges.
    ///
    /// Returns the descriptor unchanged when it is already feasible, has
    /// more cycles than the configured maximum, spans several entities, or
    /// no patch is found.
    pub fn patch_cycles(
        &mut self,
        descriptor: KOptDescriptor<S::Element>,
    ) -> KOptDescriptor<S::Element> {
        let cycles = descriptor.decompose_cycles();
        let cycle_count = cycles.cycle_count();
        if cycle_count == 1
            || cycle_count > self.max_cycles_patched
            || self.order.entity_count() > 1
        {
            return descriptor;
        }

        let current_cycle = self.smallest_cycle(&descriptor, &cycles);
        let search = PatchSearch {
            original: &descriptor,
            current_cycle,
            k: descriptor.k(),
        };
        let segments: SmallVec<[(usize, usize); 5]> = descriptor.segments().collect();
        for (start, end) in segments {
            if cycles.cycle_of(start) != current_cycle {
                continue;
            }
            let mut s1 = descriptor.removed_edge(start);
            let stop = descriptor.removed_edge(end);
            while s1 != stop {
                let s2 = self.successor(s1);
                let mut removed = descriptor.removed_edges().to_vec();
                removed.extend([s1, s2]);
                let mut added = descriptor.added_edge_to_other_endpoint().to_vec();
                added.extend([0, 0]);

                let patched = self.patch_rec(
                    &search,
                    &removed,
                    &added,
                    cycles.endpoint_to_cycle(),
                    cycle_count,
                );
                if let Some(patched) = patched.filter(KOptDescriptor::is_feasible) {
                    debug!(
                        event = "cycle_patch",
                        cycles = cycle_count,
                        patched = true,
                        k = patched.k(),
                    );
                    return patched;
                }
                s1 = s2;
            }
        }

        debug!(event = "cycle_patch", cycles = cycle_count, patched = false);
        descriptor
    }

    // One patch level: removes an edge (s3, s4) in a cycle other than the
    // current one and joins it to the previously removed endpoint.
    fn patch_rec(
        &mut self,
        search: &PatchSearch<'_, S::Element>,
        removed: &[S::Element],
        added: &[usize],
        endpoint_to_cycle: &[usize],
        remaining: usize,
    ) -> Option<KOptDescriptor<S::Element>> {
        let edge_count = removed.len() / 2;
        let s1 = removed[2 * search.k];
        let i2 = removed.len();
        let s2 = removed[i2 - 1];

        let mut attempts = (remaining - 1) * 2;
        let (s3, s3_cycle) = loop {
            if attempts == 0 {
                return None;
            }
            attempts -= 1;
            let s3 = self.random_value();
            if s3 == self.predecessor(s2) || s3 == self.successor(s2) {
                continue;
            }
            let Some(cycle) = self.cycle_of_element(search.original, endpoint_to_cycle, s3) else {
                continue;
            };
            if cycle == search.current_cycle || self.both_edges_deleted(removed, edge_count, s3) {
                continue;
            }
            break (s3, cycle);
        };
        let s4 = self.opposite_endpoint(removed, edge_count, s3);

        let mut next_removed = removed.to_vec();
        next_removed.extend([s3, s4]);
        let mut next_added = added.to_vec();
        next_added.extend([0, 0]);
        let (i3, i4) = (i2 + 1, i2 + 2);
        next_added[i2] = i3;
        next_added[i3] = i2;

        if remaining > 2 {
            let merged: SmallVec<[usize; 11]> = endpoint_to_cycle
                .iter()
                .map(|&c| if c == s3_cycle { search.current_cycle } else { c })
                .collect();
            return self
                .patch_rec(search, &next_removed, &next_added, &merged, remaining - 1)
                .filter(KOptDescriptor::is_feasible);
        }

        if s4 == s1 {
            return None;
        }
        let closing = 2 * search.k + 1;
        next_added[closing] = i4;
        next_added[i4] = closing;
        Some(KOptDescriptor::new(
            &next_removed,
            &next_added,
            |node| self.successor(node),
            |start, middle, end| self.between(start, middle, end),
        ))
    }

    fn smallest_cycle(&self, descriptor: &KOptDescriptor<S::Element>, cycles: &KOptCycle) -> usize {
        let mut sizes: SmallVec<[usize; 5]> = SmallVec::from_elem(0, cycles.cycle_count());
        for (start, end) in descriptor.segments() {
            sizes[cycles.cycle_of(start)] +=
                self.segment_len(descriptor.removed_edge(start), descriptor.removed_edge(end));
        }
        sizes
            .iter()
            .enumerate()
            .min_by_key(|&(cycle, &size)| (size, cycle))
            .map_or(0, |(cycle, _)| cycle)
    }

    // Number of steps walking forward from `start` to `end`.
    fn segment_len(&self, start: S::Element, end: S::Element) -> usize {
        let total = self.order.total_len();
        let index = |node| self.order.index_of(self.score_director, &node).unwrap_or(0);
        let (s, e) = (index(start), index(end));
        if s <= e {
            e - s
        } else {
            total - s + e
        }
    }

    fn cycle_of_element(
        &self,
        original: &KOptDescriptor<S::Element>,
        endpoint_to_cycle: &[usize],
        element: S::Element,
    ) -> Option<usize> {
        original
            .segments()
            .find(|&(start, end)| {
                self.between(original.removed_edge(start), element, original.removed_edge(end))
            })
            .map(|(start, _)| endpoint_to_cycle[start])
    }
}
