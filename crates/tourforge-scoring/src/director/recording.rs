// Recording score director for automatic undo tracking.
//
// The `RecordingScoreDirector` wraps an existing score director and stores
// typed undo closures registered by moves:
//
// ```text
// let mut recording = RecordingScoreDirector::new(&mut inner_sd);
// move.do_move(&mut recording);  // Move registers typed undo closure
// let score = recording.calculate_score();
// recording.undo_changes();  // Calls undo closures in reverse order
// ```
//
// Undo closures operate on the bare solution. The recording director puts
// full-list notifications for every entity the move touched around them, so
// the inner director sees the undo like any other list change.

use tourforge_core::domain::{ElementPosition, ListVariableSolution};
use tracing::trace;

use super::ScoreDirector;

// A score director wrapper that stores typed undo closures.
//
// # Example
//
// ```
// use tourforge_scoring::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
// use tourforge_test::{tour_length, TourSolution};
//
// let mut sd = SimpleScoreDirector::new(TourSolution::single(vec![0, 1, 2, 3]), tour_length);
// let mut recording = RecordingScoreDirector::new(&mut sd);
//
// recording.before_list_range_changed(0, 1, 3);
// recording.working_solution_mut().routes[0].swap(1, 2);
// recording.after_list_range_changed(0, 1, 3);
// recording.register_undo(Box::new(|s: &mut TourSolution| s.routes[0].swap(1, 2)));
//
// recording.undo_changes();
// assert_eq!(recording.working_solution().routes[0], vec![0, 1, 2, 3]);
// ```
pub struct RecordingScoreDirector<'a, S: ListVariableSolution> {
    inner: &'a mut dyn ScoreDirector<S>,
    // Typed undo closures registered by moves.
    undo_stack: Vec<Box<dyn FnOnce(&mut S) + Send>>,
    // Entities whose lists were changed since the last reset.
    modified_entities: Vec<usize>,
}

impl<'a, S: ListVariableSolution> RecordingScoreDirector<'a, S> {
    // Creates a new recording score director wrapping the inner director.
    pub fn new(inner: &'a mut dyn ScoreDirector<S>) -> Self {
        Self {
            inner,
            undo_stack: Vec::with_capacity(16),
            modified_entities: Vec::with_capacity(8),
        }
    }

    // Undoes all recorded changes in reverse order.
    //
    // 1. Announce the full current list of each modified entity
    // 2. Run undo closures to restore the lists
    // 3. Announce the full restored list of each modified entity
    pub fn undo_changes(&mut self) {
        trace!(
            event = "undo",
            changes = self.undo_stack.len(),
            entities = self.modified_entities.len(),
        );

        for &entity_idx in &self.modified_entities {
            let len = self.inner.working_solution().list_len(entity_idx);
            self.inner.before_list_range_changed(entity_idx, 0, len);
        }

        while let Some(undo) = self.undo_stack.pop() {
            undo(self.inner.working_solution_mut());
        }

        for entity_idx in self.modified_entities.drain(..) {
            let len = self.inner.working_solution().list_len(entity_idx);
            self.inner.after_list_range_changed(entity_idx, 0, len);
        }
    }

    // Resets the recording state for reuse.
    //
    // Call this at the start of each step to reuse the Vec allocations.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.modified_entities.clear();
    }

    // Returns the number of recorded undo closures.
    pub fn change_count(&self) -> usize {
        self.undo_stack.len()
    }

    // Returns true if there are no recorded changes.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    // Returns the entities changed since the last reset, in first-change order.
    pub fn modified_entities(&self) -> &[usize] {
        &self.modified_entities
    }
}

impl<S: ListVariableSolution> ScoreDirector<S> for RecordingScoreDirector<'_, S> {
    fn working_solution(&self) -> &S {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.inner.working_solution_mut()
    }

    fn calculate_score(&mut self) -> S::Score {
        self.inner.calculate_score()
    }

    fn clone_working_solution(&self) -> S {
        self.inner.clone_working_solution()
    }

    fn before_list_range_changed(&mut self, entity_index: usize, from: usize, to: usize) {
        self.inner.before_list_range_changed(entity_index, from, to);
    }

    fn after_list_range_changed(&mut self, entity_index: usize, from: usize, to: usize) {
        self.inner.after_list_range_changed(entity_index, from, to);

        if !self.modified_entities.contains(&entity_index) {
            self.modified_entities.push(entity_index);
        }
    }

    fn element_position(&self, element: &S::Element) -> Option<ElementPosition> {
        self.inner.element_position(element)
    }

    fn lookup_working_element(&self, element: S::Element) -> Option<S::Element> {
        self.inner.lookup_working_element(element)
    }

    fn entity_count(&self) -> usize {
        self.inner.entity_count()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.undo_stack.clear();
        self.modified_entities.clear();
    }

    fn register_undo(&mut self, undo: Box<dyn FnOnce(&mut S) + Send>) {
        self.undo_stack.push(undo);
    }
}
