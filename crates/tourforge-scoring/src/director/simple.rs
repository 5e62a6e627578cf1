//! Simple score director with full recalculation.

use tourforge_core::domain::{ElementPosition, ListStateSupply, ListVariableSolution};

use super::traits::ScoreDirector;

/// A simple score director that recalculates the full score each time.
///
/// The calculator is stored as a concrete generic type parameter, not as `Arc<dyn Fn>`.
/// Element positions are kept in a [`ListStateSupply`]. Elements of a range
/// named in `before_list_range_changed` are forgotten, and the entity is
/// re-indexed on `after_list_range_changed`, so an element that left every
/// notified list has no position.
pub struct SimpleScoreDirector<S: ListVariableSolution, C> {
    working_solution: S,
    score_calculator: C,
    score_dirty: bool,
    cached_score: Option<S::Score>,
    list_state: ListStateSupply<S::Element>,
}

impl<S, C> SimpleScoreDirector<S, C>
where
    S: ListVariableSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    /// Creates a new SimpleScoreDirector.
    pub fn new(solution: S, score_calculator: C) -> Self {
        let list_state = ListStateSupply::from_solution(&solution);
        SimpleScoreDirector {
            working_solution: solution,
            score_calculator,
            score_dirty: true,
            cached_score: None,
            list_state,
        }
    }

    /// Returns the maintained element positions.
    pub fn list_state(&self) -> &ListStateSupply<S::Element> {
        &self.list_state
    }

    /// Consumes the director, returning the working solution.
    pub fn into_working_solution(self) -> S {
        self.working_solution
    }

    fn mark_dirty(&mut self) {
        self.score_dirty = true;
    }
}

impl<S, C> ScoreDirector<S> for SimpleScoreDirector<S, C>
where
    S: ListVariableSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.mark_dirty();
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        if !self.score_dirty {
            if let Some(score) = self.cached_score {
                return score;
            }
        }

        let score = (self.score_calculator)(&self.working_solution);
        self.working_solution.set_score(Some(score));
        self.cached_score = Some(score);
        self.score_dirty = false;
        score
    }

    fn before_list_range_changed(&mut self, entity_index: usize, from: usize, to: usize) {
        self.mark_dirty();
        let to = to.min(self.working_solution.list_len(entity_index));
        for list_idx in from..to {
            let element = self.working_solution.list_get(entity_index, list_idx);
            self.list_state.unassign(&element);
        }
    }

    fn after_list_range_changed(&mut self, entity_index: usize, _from: usize, _to: usize) {
        // Positions outside [from, to) can shift when an entity's size changed
        self.list_state
            .reindex_entity(&self.working_solution, entity_index);
    }

    fn element_position(&self, element: &S::Element) -> Option<ElementPosition> {
        self.list_state.get_position(element)
    }

    fn reset(&mut self) {
        self.mark_dirty();
        self.cached_score = None;
        self.list_state = ListStateSupply::from_solution(&self.working_solution);
    }
}
