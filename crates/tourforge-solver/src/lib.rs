//! TourForge k-opt engine
//!
//! This crate provides the k-opt neighbourhood for list variables:
//! - Move system (`KOptListMove` and the flip, descriptor and planning
//!   machinery behind it)
//! - Move selection (`KOptListMoveSelector`, `KOptPicker`)

pub mod heuristic;

pub use heuristic::{
    EntityOrderInfo, FlipSublistAction, KOptConfig, KOptCycle, KOptDescriptor, KOptListMove,
    KOptListMoveSelector, KOptPicker, Move, MoveSelector, MultipleDelegateList,
};
