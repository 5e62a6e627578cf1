//! Score director implementations.
//!
//! # Score Director Types
//!
//! - [`SimpleScoreDirector`] - Full recalculation with maintained element positions
//! - [`RecordingScoreDirector`] - Automatic undo tracking wrapper

mod simple;
mod traits;

pub mod recording;

#[cfg(test)]
mod tests;

pub use recording::RecordingScoreDirector;
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
