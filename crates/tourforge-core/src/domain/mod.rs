//! Domain model traits for defining planning problems
//!
//! - `PlanningSolution`: The container for the complete problem and its score
//! - `ListVariableSolution`: A solution whose entities each own an ordered list of elements
//! - `supply`: Maintained element position lookups over those lists

mod traits;
pub mod supply;

pub use supply::{ElementPosition, ListStateSupply};
pub use traits::{ListVariableSolution, PlanningSolution};
