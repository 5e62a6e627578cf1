//! Move trait definition.

use std::fmt::Debug;

use tourforge_core::domain::ListVariableSolution;
use tourforge_scoring::ScoreDirector;

/// A move that modifies one or more list variables.
///
/// Moves are fully typed - no boxing, no virtual dispatch.
/// Undo is handled by `RecordingScoreDirector`, not by move return values.
///
/// # Type Parameters
/// * `S` - The planning solution type
///
/// # Implementation Notes
/// - Every list mutation is bracketed by range notifications on the director
/// - Use `RecordingScoreDirector` to wrap the score director for automatic undo
/// - Methods are generic over D to allow use with both concrete directors and RecordingScoreDirector
pub trait Move<S: ListVariableSolution>: Send + Sync + Debug {
    /// Returns true if this move can be executed in the current state.
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool;

    /// Executes this move, modifying the working solution.
    ///
    /// This method modifies the lists through the score director.
    /// Use `RecordingScoreDirector` to enable automatic undo via `undo_changes()`.
    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D);

    /// Returns the entity indices involved in this move.
    fn entity_indices(&self) -> &[usize];
}
