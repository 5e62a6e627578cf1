// Score director trait definition.

use tourforge_core::domain::{ElementPosition, ListVariableSolution};

// The score director manages solution state and score calculation.
//
// It is responsible for:
// - Maintaining the working solution
// - Calculating scores
// - Receiving a notification before and after every list range mutation
// - Answering owner and position lookups for elements of the current state
pub trait ScoreDirector<S: ListVariableSolution>: Send {
    // Returns a reference to the working solution.
    fn working_solution(&self) -> &S;

    // Returns a mutable reference to the working solution.
    //
    // Callers that change lists through this reference must bracket the
    // change with range notifications.
    fn working_solution_mut(&mut self) -> &mut S;

    // Calculates and returns the current score.
    fn calculate_score(&mut self) -> S::Score;

    // Clones the working solution.
    fn clone_working_solution(&self) -> S {
        self.working_solution().clone()
    }

    // Called before the range [from, to) of an entity's list is changed.
    fn before_list_range_changed(&mut self, entity_index: usize, from: usize, to: usize);

    // Called after the range [from, to) of an entity's list was changed.
    //
    // The range describes the list as it is after the change.
    fn after_list_range_changed(&mut self, entity_index: usize, from: usize, to: usize);

    // Returns the owner entity and list index of an element.
    fn element_position(&self, element: &S::Element) -> Option<ElementPosition>;

    // Resolves an element of another solver state to this director's
    // working element. Element identifiers are shared between clones, so the
    // default only checks that the element exists here.
    fn lookup_working_element(&self, element: S::Element) -> Option<S::Element> {
        self.element_position(&element).map(|_| element)
    }

    // Returns the number of list owning entities.
    fn entity_count(&self) -> usize {
        self.working_solution().entity_count()
    }

    // Resets the score director state.
    fn reset(&mut self) {}

    // Registers a typed undo closure.
    //
    // Called by moves after applying changes to enable automatic undo.
    // The closure will be called in reverse order during `undo_changes()`.
    //
    // Default implementation does nothing (for non-recording directors).
    fn register_undo(&mut self, _undo: Box<dyn FnOnce(&mut S) + Send>) {}
}
