//! Feasibility and cycle decomposition of a k-opt descriptor.
//!
//! Replacing the removed edges by the added ones splits the tour into
//! segments joined by added edges. The move is valid only when those
//! segments form a single cycle.

use smallvec::SmallVec;

use super::descriptor::KOptDescriptor;

/// Cycles produced by applying a descriptor's edge exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KOptCycle {
    cycle_count: usize,
    endpoint_to_cycle: SmallVec<[usize; 11]>,
}

impl KOptCycle {
    /// Number of disjoint cycles.
    pub fn cycle_count(&self) -> usize {
        self.cycle_count
    }

    /// Cycle id (from 0) of each endpoint; index 0 is unused.
    pub fn endpoint_to_cycle(&self) -> &[usize] {
        &self.endpoint_to_cycle
    }

    /// Cycle id of the given endpoint.
    pub fn cycle_of(&self, endpoint: usize) -> usize {
        self.endpoint_to_cycle[endpoint]
    }
}

impl<N: Copy> KOptDescriptor<N> {
    /// Returns true if the exchange yields one cycle through every endpoint.
    ///
    /// Walks the tour from the last endpoint position, alternating added
    /// edges and the segment back to the opposite end, and counts the added
    /// edges crossed before returning to the start.
    pub fn is_feasible(&self) -> bool {
        let tour = self.tour_order();
        let inverse = self.inverse_tour_order();
        let added = self.added_edge_to_other_endpoint();

        let mut count = 0;
        let mut current = 2 * self.k();
        while current != 0 {
            count += 1;
            current = inverse[added[tour[current]]] ^ 1;
        }
        count == self.k()
    }

    /// Splits the endpoints into the cycles formed after the exchange.
    pub fn decompose_cycles(&self) -> KOptCycle {
        let tour = self.tour_order();
        let inverse = self.inverse_tour_order();
        let added = self.added_edge_to_other_endpoint();
        let last = 2 * self.k();
        // Position paired with `p` by a kept tour segment.
        let segment_partner = |p: usize| match p {
            1 => last,
            p if p == last => 1,
            p => p ^ 1,
        };

        let mut visited: SmallVec<[bool; 11]> = smallvec::smallvec![false; last + 1];
        let mut endpoint_to_cycle: SmallVec<[usize; 11]> = smallvec::smallvec![0; last + 1];
        let mut cycle_count = 0;
        for start in 1..=last {
            if visited[start] {
                continue;
            }
            let mut position = start;
            while !visited[position] {
                visited[position] = true;
                endpoint_to_cycle[tour[position]] = cycle_count;
                let joined = inverse[added[tour[position]]];
                visited[joined] = true;
                endpoint_to_cycle[tour[joined]] = cycle_count;
                position = segment_partner(joined);
            }
            cycle_count += 1;
        }

        KOptCycle {
            cycle_count,
            endpoint_to_cycle,
        }
    }

    /// Kept tour segments as `(start, end)` endpoint pairs, in tour order.
    ///
    /// Each segment runs forward along the current tour from `start` to `end`.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let tour = self.tour_order();
        let k = self.k();
        (1..k)
            .map(move |j| (tour[2 * j], tour[2 * j + 1]))
            .chain(std::iter::once((tour[2 * k], tour[1])))
    }
}
