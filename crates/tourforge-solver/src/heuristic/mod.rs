//! Heuristic components for solving
//!
//! This module contains:
//! - Moves: Operations that modify list variables
//! - Selectors: Components that enumerate moves

pub mod r#move;
pub mod selector;

// Re-export move types
pub use r#move::{
    EntityOrderInfo, FlipSublistAction, KOptCycle, KOptDescriptor, KOptListMove, Move,
    MultipleDelegateList,
};

// Re-export selector types
pub use selector::{KOptConfig, KOptListMoveSelector, KOptPicker, MoveSelector};
