//! Shared test fixtures for TourForge crates.
//!
//! - [`tour`] - Route solution data type, tour length score and director helper
//! - [`notification`] - Director wrapper that logs list range notifications
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tourforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use tourforge_test::{create_director, TourSolution};
//! use tourforge_test::notification::{Notification, NotificationLog};
//! ```

pub mod notification;
pub mod tour;

pub use notification::{Notification, NotificationLog};
pub use tour::{create_director, tour_length, TourDirector, TourSolution};
