//! Building k-opt moves from explicit removed and added edges.

use smallvec::SmallVec;

use tourforge_core::domain::ListVariableSolution;
use tourforge_core::{Result, TourForgeError};
use tourforge_scoring::ScoreDirector;

use super::descriptor::KOptDescriptor;
use super::list_move::KOptListMove;
use super::order::EntityOrderInfo;

impl<S: ListVariableSolution> KOptListMove<S> {
    /// Builds the move that removes `removed` and adds `added`.
    ///
    /// Every removed edge must join two elements adjacent in the combined
    /// tour of the entities involved, and every added endpoint must be one of
    /// the removed endpoints. The entity order is the order in which the
    /// removed endpoints first appear.
    ///
    /// Returns `InvalidArgument` when the edge lists do not describe a k-opt
    /// exchange. A valid but infeasible exchange yields a non-executable move.
    pub fn from_removed_and_added_edges<D>(
        score_director: &D,
        removed: &[(S::Element, S::Element)],
        added: &[(S::Element, S::Element)],
    ) -> Result<Self>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let (descriptor, order) = Self::descriptor_from_edges(score_director, removed, added)?;
        Self::from_descriptor(score_director, &descriptor, &order)
    }

    /// Validates the edge lists and builds the descriptor and entity order
    /// they describe.
    pub fn descriptor_from_edges<D>(
        score_director: &D,
        removed: &[(S::Element, S::Element)],
        added: &[(S::Element, S::Element)],
    ) -> Result<(KOptDescriptor<S::Element>, EntityOrderInfo<S>)>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        if removed.len() != added.len() {
            return Err(TourForgeError::InvalidArgument(format!(
                "{} edges removed but {} edges added",
                removed.len(),
                added.len()
            )));
        }
        if removed.len() < 2 {
            return Err(TourForgeError::InvalidArgument(format!(
                "a k-opt move exchanges at least 2 edges, got {}",
                removed.len()
            )));
        }

        let endpoints: SmallVec<[S::Element; 10]> =
            removed.iter().flat_map(|&(a, b)| [a, b]).collect();
        for &(a, b) in added {
            for node in [a, b] {
                if !endpoints.contains(&node) {
                    return Err(TourForgeError::InvalidArgument(format!(
                        "added edge endpoint {node:?} is not an endpoint of a removed edge"
                    )));
                }
            }
        }

        let order = EntityOrderInfo::of(score_director, &endpoints)?;
        let successor = |node: S::Element| order.successor(score_director, node).unwrap_or(node);
        let between = |start, middle, end| order.between(score_director, start, middle, end);

        for &(a, b) in removed {
            if successor(a) != b && successor(b) != a {
                return Err(TourForgeError::InvalidArgument(format!(
                    "removed edge {a:?}-{b:?} does not join adjacent elements"
                )));
            }
        }

        let k = removed.len();
        let mut added_edge_to_other_endpoint: SmallVec<[usize; 11]> =
            smallvec::smallvec![0; 2 * k + 1];
        let mut used: SmallVec<[bool; 11]> = smallvec::smallvec![false; 2 * k + 1];
        let mut claim = |node: S::Element| -> Result<usize> {
            let endpoint = (1..=2 * k)
                .find(|&i| !used[i] && endpoints[i - 1] == node)
                .ok_or_else(|| {
                    TourForgeError::InvalidArgument(format!(
                        "endpoint {node:?} is used by more added edges than removed edges"
                    ))
                })?;
            used[endpoint] = true;
            Ok(endpoint)
        };
        for &(a, b) in added {
            let (i, j) = (claim(a)?, claim(b)?);
            added_edge_to_other_endpoint[i] = j;
            added_edge_to_other_endpoint[j] = i;
        }

        let descriptor =
            KOptDescriptor::new(&endpoints, &added_edge_to_other_endpoint, successor, between);
        Ok((descriptor, order))
    }
}
