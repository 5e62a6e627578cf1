//! Random sequential k-opt picking.
//!
//! A pick removes `k` edges chained so that each edge's second endpoint is
//! reconnected to the next edge's first endpoint. Picks that split the tour
//! into several cycles are handed to the cycle patcher.

use rand::Rng;

use tourforge_core::domain::ListVariableSolution;
use tourforge_scoring::ScoreDirector;

use crate::heuristic::r#move::{EntityOrderInfo, KOptDescriptor};

/// Picks random feasible k-opt descriptors over a combined tour.
pub struct KOptPicker<'a, S, D, R>
where
    S: ListVariableSolution,
    D: ScoreDirector<S> + ?Sized,
    R: Rng,
{
    pub(super) score_director: &'a D,
    pub(super) order: EntityOrderInfo<S>,
    pub(super) rng: &'a mut R,
    pub(super) max_cycles_patched: usize,
}

impl<'a, S, D, R> KOptPicker<'a, S, D, R>
where
    S: ListVariableSolution,
    D: ScoreDirector<S> + ?Sized,
    R: Rng,
{
    /// Creates a picker drawing elements from the entities of `order`.
    pub fn new(
        score_director: &'a D,
        order: EntityOrderInfo<S>,
        rng: &'a mut R,
        max_cycles_patched: usize,
    ) -> Self {
        Self {
            score_director,
            order,
            rng,
            max_cycles_patched,
        }
    }

    /// The combined tour picks are made on.
    pub fn order(&self) -> &EntityOrderInfo<S> {
        &self.order
    }

    /// Picks a feasible descriptor removing `k` edges, possibly more after
    /// cycle patching. Returns `None` when the attempt budget runs out.
    pub fn pick_descriptor(&mut self, k: usize) -> Option<KOptDescriptor<S::Element>> {
        if k < 2 || self.order.total_len() < 2 * k {
            return None;
        }
        let first = self.random_value();
        let second = if self.rng.random_bool(0.5) {
            self.successor(first)
        } else {
            self.predecessor(first)
        };
        self.pick_rec(&[first, second], 2, k)
    }

    // `picked` holds the endpoints of the first `edge - 1` removed edges.
    fn pick_rec(
        &mut self,
        picked: &[S::Element],
        edge: usize,
        k: usize,
    ) -> Option<KOptDescriptor<S::Element>> {
        let previous = picked[picked.len() - 1];
        let edge_count = edge - 1;
        let mut attempts = (k - edge + 3) * 2;
        while attempts > 0 {
            attempts -= 1;
            let t = self.random_value();
            if t == previous
                || t == self.predecessor(previous)
                || t == self.successor(previous)
                || is_edge_already_added(picked, edge_count, previous, t)
                || self.both_edges_deleted(picked, edge_count, t)
            {
                continue;
            }
            let u = self.opposite_endpoint(picked, edge_count, t);

            let mut candidate = Vec::with_capacity(picked.len() + 2);
            candidate.extend_from_slice(picked);
            candidate.push(t);
            candidate.push(u);

            if edge < k {
                if let Some(descriptor) = self.pick_rec(&candidate, edge + 1, k) {
                    return Some(descriptor);
                }
                continue;
            }

            let descriptor = KOptDescriptor::sequential(
                &candidate,
                |node| self.successor(node),
                |start, middle, end| self.between(start, middle, end),
            );
            if descriptor.is_feasible() {
                return Some(descriptor);
            }
            let patched = self.patch_cycles(descriptor);
            if patched.is_feasible() {
                return Some(patched);
            }
        }
        None
    }

    pub(super) fn random_value(&mut self) -> S::Element {
        let index = self.rng.random_range(0..self.order.total_len());
        self.order
            .element_at(self.score_director.working_solution(), index)
    }

    pub(super) fn successor(&self, node: S::Element) -> S::Element {
        self.order
            .successor(self.score_director, node)
            .unwrap_or(node)
    }

    pub(super) fn predecessor(&self, node: S::Element) -> S::Element {
        self.order
            .predecessor(self.score_director, node)
            .unwrap_or(node)
    }

    pub(super) fn between(&self, start: S::Element, middle: S::Element, end: S::Element) -> bool {
        self.order.between(self.score_director, start, middle, end)
    }

    pub(super) fn both_edges_deleted(
        &self,
        removed: &[S::Element],
        edge_count: usize,
        node: S::Element,
    ) -> bool {
        is_edge_already_deleted(removed, edge_count, node, self.predecessor(node))
            && is_edge_already_deleted(removed, edge_count, node, self.successor(node))
    }

    // Neighbour of `node` forming the next removed edge: the side not yet
    // removed, or a random side.
    pub(super) fn opposite_endpoint(
        &mut self,
        removed: &[S::Element],
        edge_count: usize,
        node: S::Element,
    ) -> S::Element {
        let predecessor = self.predecessor(node);
        let successor = self.successor(node);
        if is_edge_already_deleted(removed, edge_count, node, predecessor) {
            successor
        } else if is_edge_already_deleted(removed, edge_count, node, successor) {
            predecessor
        } else if self.rng.random_bool(0.5) {
            successor
        } else {
            predecessor
        }
    }
}

fn same_edge<E: PartialEq>(x: &E, y: &E, a: &E, b: &E) -> bool {
    (x == a && y == b) || (x == b && y == a)
}

/// Returns true if `a-b` is one of the first `edge_count` removed edges.
pub(super) fn is_edge_already_deleted<E: PartialEq>(
    removed: &[E],
    edge_count: usize,
    a: E,
    b: E,
) -> bool {
    removed
        .chunks_exact(2)
        .take(edge_count)
        .any(|edge| same_edge(&edge[0], &edge[1], &a, &b))
}

/// Returns true if `a-b` joins two of the first `edge_count` removed edges.
pub(super) fn is_edge_already_added<E: PartialEq>(
    removed: &[E],
    edge_count: usize,
    a: E,
    b: E,
) -> bool {
    (1..edge_count).any(|j| same_edge(&removed[2 * j - 1], &removed[2 * j], &a, &b))
}
