//! Signed permutation model of a k-opt move.
//!
//! Removed edges are described by `2k` endpoints, numbered from 1. Endpoints
//! `2i - 1` and `2i` are the two ends of the i-th removed edge. The tour
//! order lists the endpoints in the order they are met walking the current
//! tour from the first endpoint, and the added-edge table pairs each endpoint
//! with the endpoint it gets connected to. Index 0 of every table is unused.

use std::fmt;

use smallvec::SmallVec;

use super::sort::{stable_sort_range, tour_position_order};

/// Endpoint tables of a k-opt move over nodes of type `N`.
#[derive(Clone, PartialEq, Eq)]
pub struct KOptDescriptor<N> {
    k: usize,
    removed_edges: SmallVec<[N; 10]>,
    tour_order: SmallVec<[usize; 11]>,
    inverse_tour_order: SmallVec<[usize; 11]>,
    added_edge_to_other_endpoint: SmallVec<[usize; 11]>,
}

impl<N: Copy + PartialEq> KOptDescriptor<N> {
    /// Creates the descriptor of a sequential k-opt move.
    ///
    /// The removed edges are `(removed_edges[2i], removed_edges[2i + 1])` and
    /// each edge's second endpoint is connected to the next edge's first
    /// endpoint, the last one closing back to the very first endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the number of endpoints is odd or less than 4.
    pub fn sequential<F, B>(removed_edges: &[N], successor: F, between: B) -> Self
    where
        F: Fn(N) -> N,
        B: Fn(N, N, N) -> bool,
    {
        let k = Self::edge_count(removed_edges);
        let mut added: SmallVec<[usize; 11]> = smallvec::smallvec![0; 2 * k + 1];
        added[1] = 2 * k;
        added[2 * k] = 1;
        for i in 1..k {
            added[2 * i] = 2 * i + 1;
            added[2 * i + 1] = 2 * i;
        }
        Self::build(removed_edges, added, successor, between)
    }

    /// Creates a descriptor with an explicit added-edge table.
    ///
    /// `added_edge_to_other_endpoint` has `2k + 1` entries; entry `i` is the
    /// endpoint that endpoint `i` gets connected to.
    ///
    /// # Panics
    ///
    /// Panics if the table does not pair every endpoint with a different one.
    pub fn new<F, B>(
        removed_edges: &[N],
        added_edge_to_other_endpoint: &[usize],
        successor: F,
        between: B,
    ) -> Self
    where
        F: Fn(N) -> N,
        B: Fn(N, N, N) -> bool,
    {
        let k = Self::edge_count(removed_edges);
        let added = added_edge_to_other_endpoint;
        assert_eq!(added.len(), 2 * k + 1, "added-edge table needs 2k + 1 entries");
        for i in 1..=2 * k {
            let other = added[i];
            assert!(
                (1..=2 * k).contains(&other) && other != i && added[other] == i,
                "endpoint {i} is not paired"
            );
        }
        Self::build(removed_edges, SmallVec::from_slice(added), successor, between)
    }

    fn edge_count(removed_edges: &[N]) -> usize {
        assert!(
            removed_edges.len() >= 4 && removed_edges.len() % 2 == 0,
            "a k-opt move needs an even number of at least 4 endpoints"
        );
        removed_edges.len() / 2
    }

    fn build<F, B>(
        removed_edges: &[N],
        added_edge_to_other_endpoint: SmallVec<[usize; 11]>,
        successor: F,
        between: B,
    ) -> Self
    where
        F: Fn(N) -> N,
        B: Fn(N, N, N) -> bool,
    {
        let k = removed_edges.len() / 2;
        let node = |endpoint: usize| removed_edges[endpoint - 1];

        // For every removed edge keep the endpoint that comes first in tour order.
        let mut tour_order: SmallVec<[usize; 11]> = smallvec::smallvec![0; 2 * k + 1];
        for j in 1..=k {
            let i = 2 * j - 1;
            tour_order[j] = if successor(node(i)) == node(i + 1) { i } else { i + 1 };
        }

        let order = tour_position_order(node(tour_order[1]), between);
        stable_sort_range(&mut tour_order, 2, k + 1, |&a, &b| order(&node(a), &node(b)));

        for j in (2..=2 * k).rev().step_by(2) {
            let i = tour_order[j / 2];
            tour_order[j - 1] = i;
            tour_order[j] = if i % 2 == 1 { i + 1 } else { i - 1 };
        }

        let mut inverse_tour_order: SmallVec<[usize; 11]> = smallvec::smallvec![0; 2 * k + 1];
        for position in 1..=2 * k {
            inverse_tour_order[tour_order[position]] = position;
        }

        Self {
            k,
            removed_edges: SmallVec::from_slice(removed_edges),
            tour_order,
            inverse_tour_order,
            added_edge_to_other_endpoint,
        }
    }
}

impl<N: Copy> KOptDescriptor<N> {
    /// Number of removed (and added) edges.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The `2k` removed endpoints; endpoint `i` is at index `i - 1`.
    pub fn removed_edges(&self) -> &[N] {
        &self.removed_edges
    }

    /// The node of endpoint `i` (1-based).
    pub fn removed_edge(&self, endpoint: usize) -> N {
        self.removed_edges[endpoint - 1]
    }

    /// Endpoints in the order they appear along the current tour (index 0 unused).
    pub fn tour_order(&self) -> &[usize] {
        &self.tour_order
    }

    /// Position of each endpoint in the tour order (index 0 unused).
    pub fn inverse_tour_order(&self) -> &[usize] {
        &self.inverse_tour_order
    }

    /// Endpoint each endpoint is connected to by an added edge (index 0 unused).
    pub fn added_edge_to_other_endpoint(&self) -> &[usize] {
        &self.added_edge_to_other_endpoint
    }
}

impl<N: fmt::Debug> fmt::Debug for KOptDescriptor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KOptDescriptor")
            .field("k", &self.k)
            .field("removed_edges", &self.removed_edges)
            .field("tour_order", &&self.tour_order[1..])
            .field("added_edge_to_other_endpoint", &&self.added_edge_to_other_endpoint[1..])
            .finish()
    }
}

impl<N: fmt::Debug> fmt::Display for KOptDescriptor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-opt(removed: [", self.k)?;
        for (i, pair) in self.removed_edges.chunks(2).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}-{:?}", pair[0], pair[1])?;
        }
        write!(f, "], added: [")?;
        let mut first = true;
        for i in 1..=2 * self.k {
            let other = self.added_edge_to_other_endpoint[i];
            if i < other {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(
                    f,
                    "{:?}-{:?}",
                    self.removed_edges[i - 1],
                    self.removed_edges[other - 1]
                )?;
            }
        }
        write!(f, "])")
    }
}
