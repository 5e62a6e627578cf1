//! Selectors for moves.
//!
//! Selectors enumerate the moves that the solver considers when exploring
//! the solution space.

pub mod k_opt;
mod move_selector;

pub use k_opt::{KOptConfig, KOptListMoveSelector, KOptPicker};
pub use move_selector::MoveSelector;
