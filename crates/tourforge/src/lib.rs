//! TourForge - K-opt moves for list variables
//!
//! Removes K edges from the closed tour formed by one or more entity
//! lists, reconnects the endpoints and carries out the exchange as a short
//! sequence of sublist reversals plus one rotation.
//!
//! # Example
//!
//! ```rust
//! use tourforge::prelude::*;
//! use tourforge_test::create_director;
//!
//! let mut director = create_director(vec![vec![1, 2, 3, 4]]);
//! let m = KOptListMove::from_removed_and_added_edges(
//!     &director,
//!     &[(1, 2), (3, 4)],
//!     &[(1, 3), (2, 4)],
//! )
//! .unwrap();
//!
//! assert!(m.is_doable(&director));
//! m.do_move(&mut director);
//! assert_eq!(director.working_solution().routes, vec![vec![1, 3, 2, 4]]);
//! ```

// Error handling
pub use tourforge_core::{Result, TourForgeError};

// Score types
pub use tourforge_core::score::{Score, SimpleScore};

// Domain traits
pub use tourforge_core::domain::{
    ElementPosition, ListStateSupply, ListVariableSolution, PlanningSolution,
};

// Score directors
pub use tourforge_scoring::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};

// Configuration
pub use tourforge_config::{ConfigError, EngineConfig, EnvironmentMode, KOptSelectorConfig};

// K-opt engine
pub use tourforge_solver::heuristic::r#move::{
    cyclic_between, flip_subarray, IndexedSequence, ReversalPlan,
};
pub use tourforge_solver::{
    EntityOrderInfo, FlipSublistAction, KOptConfig, KOptCycle, KOptDescriptor, KOptListMove,
    KOptListMoveSelector, KOptPicker, Move, MoveSelector, MultipleDelegateList,
};

mod console;
pub use console::{init_logging, DEFAULT_DIRECTIVE};

pub mod prelude {
    pub use super::{
        EngineConfig, KOptConfig, KOptDescriptor, KOptListMove, KOptListMoveSelector,
        ListVariableSolution, Move, MoveSelector, RecordingScoreDirector, ScoreDirector,
        SimpleScore, TourForgeError,
    };
}
