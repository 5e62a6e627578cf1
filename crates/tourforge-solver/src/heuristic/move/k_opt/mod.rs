//! K-opt moves on list variables.
//!
//! A k-opt move removes `k` edges of a tour and reconnects the pieces with
//! `k` other edges. The pieces are kept, possibly reversed, so the move is
//! carried out as a handful of sub-list reversals:
//!
//! - [`KOptDescriptor`] records the removed endpoints, their order along
//!   the tour and the added-edge pairing
//! - [`KOptDescriptor::is_feasible`] and [`KOptDescriptor::decompose_cycles`]
//!   check that the exchange yields a single tour
//! - [`plan_reversals`] turns a feasible descriptor into flips
//! - [`KOptListMove`] executes the flips on the combined list of every
//!   entity involved, then rotates and redistributes it
//!
//! Moves spanning several entities treat their lists as one cyclic tour, in
//! the order given by [`EntityOrderInfo`].

mod builder;
mod cycle;
mod descriptor;
mod flip;
mod list_move;
mod multi_list;
mod order;
mod planner;
mod sort;


pub use cycle::KOptCycle;
pub use descriptor::KOptDescriptor;
pub use flip::{flip_subarray, FlipSublistAction, IndexedSequence};
pub use list_move::KOptListMove;
pub use multi_list::MultipleDelegateList;
pub use order::{cyclic_between, EntityOrderInfo};
pub use planner::{plan_reversals, ReversalPlan};
pub use sort::{stable_sort_range, tour_position_order};
