//! Score directors for TourForge.
//!
//! A score director owns the working solution, scores it, and is told about
//! every list range a move is about to change and has changed. Moves never
//! touch a solution except through a director.

pub mod director;

pub use director::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
