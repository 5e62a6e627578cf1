//! KOptListMove - a k-opt edge exchange over one or more list variables.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;
use tracing::{debug, trace};

use tourforge_core::domain::ListVariableSolution;
use tourforge_core::{Result, TourForgeError};
use tourforge_scoring::ScoreDirector;

use super::descriptor::KOptDescriptor;
use super::flip::FlipSublistAction;
use super::multi_list::MultipleDelegateList;
use super::order::EntityOrderInfo;
use super::planner::plan_reversals;
use crate::heuristic::r#move::Move;

/// A k-opt move realized as flips on the combined list of its entities,
/// followed by a rotation and a redistribution of the combined list over
/// the entities.
///
/// The entity lists are treated as one cyclic tour in a fixed entity order.
/// After the flips, the combined list is rotated by `post_shift` and cut so
/// that every element that ended an entity list before the move ends one
/// again. The last entity always ends at the last combined index.
///
/// Moves are built by [`KOptListMove::from_descriptor`] or
/// [`KOptListMove::from_removed_and_added_edges`]. An infeasible exchange
/// produces a move with no flips that is not executable.
///
/// # Example
///
/// ```
/// use tourforge_scoring::{RecordingScoreDirector, ScoreDirector};
/// use tourforge_solver::heuristic::r#move::{KOptListMove, Move};
/// use tourforge_test::{create_director, TourSolution};
///
/// let mut director = create_director(vec![vec![1, 2, 3, 4]]);
/// let m = KOptListMove::<TourSolution>::from_removed_and_added_edges(
///     &director,
///     &[(1, 2), (3, 4)],
///     &[(1, 3), (2, 4)],
/// )
/// .unwrap();
/// assert!(m.is_doable(&director));
///
/// {
///     let mut recording = RecordingScoreDirector::new(&mut director);
///     m.do_move(&mut recording);
///     assert_eq!(recording.working_solution().routes[0], vec![1, 3, 2, 4]);
///     recording.undo_changes();
/// }
/// assert_eq!(director.working_solution().routes[0], vec![1, 2, 3, 4]);
/// ```
pub struct KOptListMove<S: ListVariableSolution> {
    k: usize,
    entities: SmallVec<[usize; 4]>,
    removed_endpoints: SmallVec<[S::Element; 10]>,
    flips: Vec<FlipSublistAction>,
    post_shift: isize,
    end_indices_before: SmallVec<[usize; 4]>,
    end_indices_after: SmallVec<[usize; 4]>,
    // One element of each entity, in entity order, before and after the move.
    anchors_before: SmallVec<[S::Element; 4]>,
    anchors_after: SmallVec<[S::Element; 4]>,
    // Undo moves restore boundaries and rotation before reverting the flips.
    rotate_first: bool,
    _phantom: PhantomData<fn() -> S>,
}

impl<S: ListVariableSolution> Clone for KOptListMove<S> {
    fn clone(&self) -> Self {
        Self {
            k: self.k,
            entities: self.entities.clone(),
            removed_endpoints: self.removed_endpoints.clone(),
            flips: self.flips.clone(),
            post_shift: self.post_shift,
            end_indices_before: self.end_indices_before.clone(),
            end_indices_after: self.end_indices_after.clone(),
            anchors_before: self.anchors_before.clone(),
            anchors_after: self.anchors_after.clone(),
            rotate_first: self.rotate_first,
            _phantom: PhantomData,
        }
    }
}

impl<S: ListVariableSolution> fmt::Debug for KOptListMove<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KOptListMove")
            .field("k", &self.k)
            .field("entities", &self.entities)
            .field("removed_endpoints", &self.removed_endpoints)
            .field("flips", &self.flips)
            .field("post_shift", &self.post_shift)
            .field("end_indices_before", &self.end_indices_before)
            .field("end_indices_after", &self.end_indices_after)
            .field("undo", &self.rotate_first)
            .finish()
    }
}

impl<S: ListVariableSolution> KOptListMove<S> {
    /// Builds the move for `descriptor` over the combined tour described by `order`.
    ///
    /// The descriptor must have been built with the successor and
    /// betweenness of the same order. An infeasible descriptor yields an
    /// empty, non-executable move.
    ///
    /// Fails with `InvalidState` if a removed endpoint is not part of `order`.
    pub fn from_descriptor<D>(
        score_director: &D,
        descriptor: &KOptDescriptor<S::Element>,
        order: &EntityOrderInfo<S>,
    ) -> Result<Self>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let mut indices: SmallVec<[usize; 10]> = SmallVec::new();
        for element in descriptor.removed_edges() {
            let index = order.index_of(score_director, element).ok_or_else(|| {
                TourForgeError::InvalidState(format!(
                    "element {element:?} is outside the entities {:?}",
                    order.entities()
                ))
            })?;
            indices.push(index);
        }

        let end_indices = order.end_indices();
        let solution = score_director.working_solution();
        let anchors: SmallVec<[S::Element; 4]> = end_indices
            .iter()
            .map(|&end| order.element_at(solution, end))
            .collect();
        let mut m = Self {
            k: descriptor.k(),
            entities: SmallVec::from_slice(order.entities()),
            removed_endpoints: SmallVec::from_slice(descriptor.removed_edges()),
            flips: Vec::new(),
            post_shift: 0,
            end_indices_before: end_indices.clone(),
            end_indices_after: end_indices.clone(),
            anchors_before: anchors.clone(),
            anchors_after: anchors.clone(),
            rotate_first: false,
            _phantom: PhantomData,
        };

        if !descriptor.is_feasible() {
            debug!(
                event = "k_opt_move",
                k = descriptor.k(),
                feasible = false,
                descriptor = %descriptor,
            );
            return Ok(m);
        }

        let removed = descriptor.removed_edges();
        let index_of = |element: S::Element| {
            removed
                .iter()
                .position(|&e| e == element)
                .map_or(0, |i| indices[i])
        };
        let plan = plan_reversals(descriptor, order.total_len(), index_of);

        // Entity ends keep their elements: the element with the j-th
        // smallest final index ends, or lies in, entity j after the move.
        let mut final_ends: SmallVec<[(usize, S::Element); 4]> = end_indices
            .iter()
            .zip(&anchors)
            .filter_map(|(&end, &element)| plan.final_index_of(end).map(|i| (i, element)))
            .collect();
        final_ends.sort_unstable_by_key(|&(index, _)| index);
        let mut end_indices_after: SmallVec<[usize; 4]> =
            final_ends.iter().map(|&(index, _)| index).collect();
        if let Some(last) = end_indices_after.last_mut() {
            *last = order.total_len() - 1;
        }

        m.flips = plan.flips;
        m.post_shift = plan.post_shift;
        m.end_indices_after = end_indices_after;
        m.anchors_after = final_ends.iter().map(|&(_, element)| element).collect();

        debug!(
            event = "k_opt_move",
            k = m.k,
            feasible = true,
            flips = m.flips.len(),
            post_shift = m.post_shift,
            entities = m.entities.len(),
            descriptor = %descriptor,
        );
        Ok(m)
    }

    /// Number of exchanged edges.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Flips on the combined list, in execution order.
    pub fn flips(&self) -> &[FlipSublistAction] {
        &self.flips
    }

    /// Rotation of the combined list.
    pub fn post_shift(&self) -> isize {
        self.post_shift
    }

    /// Returns true if this is an undo move.
    pub fn is_undo(&self) -> bool {
        self.rotate_first
    }

    /// Returns true unless the exchange was infeasible.
    pub fn is_executable(&self) -> bool {
        !self.flips.is_empty()
    }

    /// Entities whose lists the move touches, in combined order.
    pub fn affected_entities(&self) -> &[usize] {
        &self.entities
    }

    /// The distinct endpoints of the removed edges.
    pub fn affected_elements(&self) -> Vec<S::Element> {
        let mut elements = Vec::with_capacity(self.removed_endpoints.len());
        for &element in &self.removed_endpoints {
            if !elements.contains(&element) {
                elements.push(element);
            }
        }
        elements
    }

    /// Returns the move that reverts this one.
    ///
    /// It restores the entity boundaries and undoes the rotation first, then
    /// applies the flips in reverse order. The undo of an undo move is the
    /// original move.
    pub fn undo_move(&self) -> Self {
        Self {
            k: self.k,
            entities: self.entities.clone(),
            removed_endpoints: self.removed_endpoints.clone(),
            flips: self.flips.iter().rev().copied().collect(),
            post_shift: -self.post_shift,
            end_indices_before: self.end_indices_after.clone(),
            end_indices_after: self.end_indices_before.clone(),
            anchors_before: self.anchors_after.clone(),
            anchors_after: self.anchors_before.clone(),
            rotate_first: !self.rotate_first,
            _phantom: PhantomData,
        }
    }

    /// Re-targets the move to another solver state holding the same elements.
    ///
    /// Elements are resolved through the destination director and each
    /// entity is re-resolved from the position of one of its elements, so
    /// the destination may hold the lists under other entity indices. Flip
    /// indices, rotation and boundaries are copied unchanged.
    ///
    /// Fails with `InvalidState` if an element is missing, two entities
    /// resolve to the same destination entity, a removed endpoint lies
    /// outside the resolved entities, or the entity lists differ in size
    /// from the ones this move was built for.
    pub fn rebase<D>(&self, destination: &D) -> Result<Self>
    where
        D: ScoreDirector<S> + ?Sized,
    {
        let resolve = |element: S::Element| {
            destination
                .lookup_working_element(element)
                .and_then(|working| {
                    destination
                        .element_position(&working)
                        .map(|position| (working, position.entity_idx))
                })
                .ok_or_else(|| {
                    TourForgeError::InvalidState(format!(
                        "element {element:?} does not exist in the destination"
                    ))
                })
        };

        let mut entities: SmallVec<[usize; 4]> = SmallVec::with_capacity(self.entities.len());
        let mut anchors_before = SmallVec::with_capacity(self.anchors_before.len());
        for &anchor in &self.anchors_before {
            let (working, entity) = resolve(anchor)?;
            if entities.contains(&entity) {
                return Err(TourForgeError::InvalidState(format!(
                    "entity {entity} holds elements of two rebased entities"
                )));
            }
            entities.push(entity);
            anchors_before.push(working);
        }

        let mut anchors_after = SmallVec::with_capacity(self.anchors_after.len());
        for &anchor in &self.anchors_after {
            anchors_after.push(resolve(anchor)?.0);
        }

        let mut removed_endpoints = SmallVec::with_capacity(self.removed_endpoints.len());
        for &element in &self.removed_endpoints {
            let (working, entity) = resolve(element)?;
            if !entities.contains(&entity) {
                return Err(TourForgeError::InvalidState(format!(
                    "element {element:?} lies outside the rebased entities {entities:?}"
                )));
            }
            removed_endpoints.push(working);
        }

        let solution = destination.working_solution();
        let mut previous_end = None::<usize>;
        for (&entity, &end) in entities.iter().zip(&self.end_indices_before) {
            let expected = end - previous_end.map_or(0, |p| p + 1) + 1;
            if solution.list_len(entity) != expected {
                return Err(TourForgeError::InvalidState(format!(
                    "entity {entity} does not match the rebased move"
                )));
            }
            previous_end = Some(end);
        }

        let mut rebased = self.clone();
        rebased.entities = entities;
        rebased.removed_endpoints = removed_endpoints;
        rebased.anchors_before = anchors_before;
        rebased.anchors_after = anchors_after;
        Ok(rebased)
    }

    /// Applies the move to a solution without notifications.
    pub fn apply(&self, solution: &mut S) {
        if self.rotate_first {
            self.apply_rotation(solution);
        }
        for flip in &self.flips {
            flip.apply(solution, &self.entities);
        }
        if !self.rotate_first {
            self.apply_rotation(solution);
        }
    }

    fn changes_layout(&self) -> bool {
        self.post_shift != 0 || self.end_indices_before != self.end_indices_after
    }

    fn apply_rotation(&self, solution: &mut S) {
        if !self.changes_layout() {
            return;
        }
        let mut view = MultipleDelegateList::new(solution, &self.entities);
        view.rotate(self.post_shift);
        view.move_elements_of_delegates(&self.end_indices_after);
    }

    // Rotation and redistribution notify the full list of every entity.
    fn execute_rotation<D>(&self, score_director: &mut D)
    where
        D: ScoreDirector<S> + ?Sized,
    {
        if !self.changes_layout() {
            return;
        }
        trace!(
            event = "k_opt_rotate",
            post_shift = self.post_shift,
            entities = self.entities.len()
        );
        for &entity in &self.entities {
            let len = score_director.working_solution().list_len(entity);
            score_director.before_list_range_changed(entity, 0, len);
        }
        self.apply_rotation(score_director.working_solution_mut());
        for &entity in &self.entities {
            let len = score_director.working_solution().list_len(entity);
            score_director.after_list_range_changed(entity, 0, len);
        }
    }

    /// Executes the move through the score director, with notifications.
    pub fn execute<D>(&self, score_director: &mut D)
    where
        D: ScoreDirector<S> + ?Sized,
    {
        if self.rotate_first {
            self.execute_rotation(score_director);
        }
        for flip in &self.flips {
            flip.execute(score_director, &self.entities);
        }
        if !self.rotate_first {
            self.execute_rotation(score_director);
        }
    }
}

impl<S: ListVariableSolution> Move<S> for KOptListMove<S> {
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        if !self.is_executable() {
            return false;
        }
        let solution = score_director.working_solution();
        self.entities
            .iter()
            .all(|&entity| entity < solution.entity_count())
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) {
        self.execute(score_director);

        let undo = self.undo_move();
        score_director.register_undo(Box::new(move |solution: &mut S| {
            undo.apply(solution);
        }));
    }

    fn entity_indices(&self) -> &[usize] {
        &self.entities
    }
}
