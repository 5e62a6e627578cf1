//! Route solution fixtures.
//!
//! Elements are `u32` ids placed on a line, so the distance between two
//! elements is the difference of their ids. Each route is a closed tour.

use tourforge_core::domain::{ListVariableSolution, PlanningSolution};
use tourforge_core::score::SimpleScore;
use tourforge_scoring::SimpleScoreDirector;

/// A solution with one route (list of element ids) per entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourSolution {
    pub routes: Vec<Vec<u32>>,
    pub score: Option<SimpleScore>,
}

impl TourSolution {
    /// Creates a solution from routes.
    pub fn new(routes: Vec<Vec<u32>>) -> Self {
        Self {
            routes,
            score: None,
        }
    }

    /// Creates a solution with a single route.
    pub fn single(route: Vec<u32>) -> Self {
        Self::new(vec![route])
    }

    /// Creates a single route visiting `1..=n` in order.
    pub fn sequential(n: u32) -> Self {
        Self::single((1..=n).collect())
    }
}

impl PlanningSolution for TourSolution {
    type Score = SimpleScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }
}

impl ListVariableSolution for TourSolution {
    type Element = u32;

    fn entity_count(&self) -> usize {
        self.routes.len()
    }

    fn list_len(&self, entity_idx: usize) -> usize {
        self.routes[entity_idx].len()
    }

    fn list_get(&self, entity_idx: usize, position: usize) -> u32 {
        self.routes[entity_idx][position]
    }

    fn list_set(&mut self, entity_idx: usize, position: usize, elem: u32) -> u32 {
        std::mem::replace(&mut self.routes[entity_idx][position], elem)
    }

    fn list_replace(&mut self, entity_idx: usize, elems: Vec<u32>) -> Vec<u32> {
        std::mem::replace(&mut self.routes[entity_idx], elems)
    }

    fn list_reverse(&mut self, entity_idx: usize, start: usize, end: usize) {
        self.routes[entity_idx][start..end].reverse();
    }
}

/// Negated total length of all closed routes.
pub fn tour_length(solution: &TourSolution) -> SimpleScore {
    let total: u64 = solution
        .routes
        .iter()
        .filter(|route| route.len() > 1)
        .map(|route| {
            route
                .iter()
                .zip(route.iter().cycle().skip(1))
                .map(|(&a, &b)| u64::from(a.abs_diff(b)))
                .sum::<u64>()
        })
        .sum();
    SimpleScore::from_length(total)
}

/// Director type returned by [`create_director`].
pub type TourDirector = SimpleScoreDirector<TourSolution, fn(&TourSolution) -> SimpleScore>;

/// Creates a full-recalculation director scoring by tour length.
pub fn create_director(routes: Vec<Vec<u32>>) -> TourDirector {
    SimpleScoreDirector::new(
        TourSolution::new(routes),
        tour_length as fn(&TourSolution) -> SimpleScore,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_length_closes_each_route() {
        let solution = TourSolution::new(vec![vec![0, 1, 2, 3], vec![5], vec![]]);
        assert_eq!(tour_length(&solution), SimpleScore::of(-6));
    }

    #[test]
    fn sequential_route() {
        assert_eq!(TourSolution::sequential(4).routes, vec![vec![1, 2, 3, 4]]);
    }
}
