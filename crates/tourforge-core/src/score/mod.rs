//! Score types for comparing solutions
//!
//! A move is judged by the score of the working solution after it is applied.
//! Scores are small `Copy` values ordered so that greater is better.

mod simple;
mod traits;


pub use simple::SimpleScore;
pub use traits::Score;
