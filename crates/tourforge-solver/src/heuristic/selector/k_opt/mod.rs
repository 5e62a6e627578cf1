//! K-opt move selector for tour optimization.
//!
//! Generates random k-opt moves on list variables. Each pick removes `k`
//! edges of one entity's tour in a sequential chain; picks that would split
//! the tour into several cycles are patched by removing extra edges, or
//! discarded.
//!
//! # Example
//!
//! ```
//! use tourforge_config::{EngineConfig, EnvironmentMode, KOptSelectorConfig};
//! use tourforge_solver::heuristic::selector::{KOptConfig, KOptListMoveSelector, MoveSelector};
//! use tourforge_test::{create_director, TourSolution};
//!
//! let engine = EngineConfig::new()
//!     .with_environment_mode(EnvironmentMode::Reproducible)
//!     .with_k_opt(KOptSelectorConfig::new(3, 3).with_moves_per_step(5));
//! let config = KOptConfig::from_selector_config(&engine);
//! assert_eq!(config.seed, Some(0));
//!
//! let director = create_director(vec![(1..=30).collect()]);
//! let selector = KOptListMoveSelector::<TourSolution>::new(config);
//! assert_eq!(selector.size(&director), 5);
//! assert!(selector.iter_moves(&director).count() <= 5);
//! ```

mod config;
mod patch;
mod picker;
mod selector;

pub use config::KOptConfig;
pub use picker::KOptPicker;
pub use selector::KOptListMoveSelector;
