//! Reduces a feasible k-opt descriptor to a sequence of flips.
//!
//! The planner works on a copy of the descriptor's tour order. Each step
//! picks a reversal of the endpoint permutation, emits the flip of the
//! combined list that realizes it, and reverses the matching part of the
//! permutation. Steps that orient the most added edges are preferred. When
//! none exists, a hurdle-cutting reversal unblocks the permutation. The plan
//! ends once every added edge joins adjacent endpoints.

use smallvec::SmallVec;

use super::descriptor::KOptDescriptor;
use super::flip::{flip_subarray, FlipSublistAction};

/// Flips realizing a k-opt move, plus the rotation that restores the
/// original first element to index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversalPlan {
    /// Flips on the combined list, in execution order.
    pub flips: Vec<FlipSublistAction>,
    /// Rotation applied after the flips.
    pub post_shift: isize,
    /// `original_to_current[p]` is the original combined index of the
    /// element found at index `p` after the flips, before rotation.
    pub original_to_current: Vec<usize>,
}

impl ReversalPlan {
    /// Index an element originally at `original_index` ends up at, rotation included.
    pub fn final_index_of(&self, original_index: usize) -> Option<usize> {
        let len = self.original_to_current.len() as isize;
        let position = self
            .original_to_current
            .iter()
            .position(|&i| i == original_index)? as isize;
        Some((position + self.post_shift).rem_euclid(len) as usize)
    }
}

struct PermutationState<'d> {
    tour: SmallVec<[usize; 11]>,
    inverse: SmallVec<[usize; 11]>,
    added: &'d [usize],
    k: usize,
}

impl PermutationState<'_> {
    // Position of the endpoint joined by an added edge to the one at `position`.
    fn joined(&self, position: usize) -> usize {
        self.inverse[self.added[self.tour[position]]]
    }

    fn reverse_part(&mut self, mut start: usize, mut end: usize) {
        while start < end {
            self.tour.swap(start, end);
            self.inverse[self.tour[start]] = start;
            self.inverse[self.tour[end]] = end;
            start += 1;
            end -= 1;
        }
    }

    fn count_oriented(&mut self, start: usize, end: usize) -> usize {
        self.reverse_part(start, end);
        let count = (1..=2 * self.k - 2)
            .filter(|&i| {
                let j = self.joined(i);
                j >= i + 2 && i % 2 == j % 2
            })
            .count();
        self.reverse_part(start, end);
        count
    }
}

/// Computes the flip plan of a feasible descriptor.
///
/// `total` is the length of the combined list and `index_of` maps a node
/// to its original combined index.
pub fn plan_reversals<N, I>(descriptor: &KOptDescriptor<N>, total: usize, index_of: I) -> ReversalPlan
where
    N: Copy,
    I: Fn(N) -> usize,
{
    let k = descriptor.k();
    let mut state = PermutationState {
        tour: SmallVec::from_slice(descriptor.tour_order()),
        inverse: SmallVec::from_slice(descriptor.inverse_tour_order()),
        added: descriptor.added_edge_to_other_endpoint(),
        k,
    };
    let mut original_to_current: Vec<usize> = (0..total).collect();
    let mut flips = Vec::new();

    let mut edge_flip = |a: (usize, usize), b: (usize, usize), o2c: &mut Vec<usize>| {
        let current = |endpoint: usize| {
            let original = index_of(descriptor.removed_edge(endpoint));
            o2c.iter().position(|&i| i == original).unwrap_or(original)
        };
        let (a0, a1) = (current(a.0), current(a.1));
        let (b0, b1) = (current(b.0), current(b.1));
        let from = if (a0 + 1) % total == a1 { a1 } else { a0 };
        let to = if (b0 + 1) % total == b1 { b1 } else { b0 };
        flip_subarray(o2c, from, to);
        flips.push(FlipSublistAction::new(from, to));
    };

    loop {
        let mut best: Option<(usize, usize, usize)> = None;
        for first in 1..=2 * k - 2 {
            let second = state.joined(first);
            if second >= first + 2 && first % 2 == second % 2 {
                let score = if first % 2 == 1 {
                    state.count_oriented(first + 1, second)
                } else {
                    state.count_oriented(first, second - 1)
                };
                if best.map_or(true, |(_, _, best_score)| score > best_score) {
                    best = Some((first, second, score));
                }
            }
        }

        if let Some((first, second, _)) = best {
            let t = |p: usize| state.tour[p];
            if first % 2 == 1 {
                edge_flip(
                    (t(first + 1), t(first)),
                    (t(second), t(second + 1)),
                    &mut original_to_current,
                );
                state.reverse_part(first + 1, second);
            } else {
                edge_flip(
                    (t(first - 1), t(first)),
                    (t(second), t(second - 1)),
                    &mut original_to_current,
                );
                state.reverse_part(first, second - 1);
            }
            continue;
        }

        let hurdle = (1..2 * k).step_by(2).find_map(|first| {
            let second = state.joined(first);
            (second >= first + 2).then_some((first, second))
        });
        match hurdle {
            Some((first, second)) => {
                let t = |p: usize| state.tour[p];
                edge_flip(
                    (t(first), t(first + 1)),
                    (t(second), t(second - 1)),
                    &mut original_to_current,
                );
                state.reverse_part(first + 1, second - 1);
            }
            None => break,
        }
    }

    let start = original_to_current
        .iter()
        .position(|&i| i == 0)
        .unwrap_or(0);
    ReversalPlan {
        flips,
        post_shift: -(start as isize),
        original_to_current,
    }
}
