//! Move system for modifying planning solutions.
//!
//! Moves are the operations the solver applies to list variables. The k-opt
//! family removes `k` edges of a tour and reconnects it:
//! - `KOptListMove<S>` - a k-opt exchange over one or more entity lists
//! - `FlipSublistAction` - a single (possibly wrapping) reversal of the
//!   combined list, the building block of every k-opt move
//!
//! Undo is handled by `RecordingScoreDirector`, not by moves returning undo data.

pub mod k_opt;
mod traits;

#[cfg(test)]
mod tests;

pub use k_opt::{
    cyclic_between, flip_subarray, plan_reversals, stable_sort_range, tour_position_order,
    EntityOrderInfo, FlipSublistAction, IndexedSequence, KOptCycle, KOptDescriptor, KOptListMove,
    MultipleDelegateList, ReversalPlan,
};
pub use traits::Move;
