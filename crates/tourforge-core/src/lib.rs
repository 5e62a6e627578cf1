//! TourForge Core - Core types and traits for the K-opt engine
//!
//! This crate provides the fundamental abstractions shared by the other crates:
//! - Score types for comparing solutions
//! - Domain traits for solutions holding list (sequence) variables
//! - Element position supply for O(1) owner/index lookups
//! - The error type used by move construction

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{ListVariableSolution, PlanningSolution};
pub use error::{Result, TourForgeError};
pub use score::{Score, SimpleScore};
