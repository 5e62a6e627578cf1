//! Supply infrastructure for list variable position tracking.
//!
//! A supply answers "which entity owns this element, and where" in O(1)
//! instead of scanning every list. Score directors keep one current by
//! re-indexing the lists named in their change notifications.

mod list_state;

#[cfg(test)]
mod tests;

pub use list_state::{ElementPosition, ListStateSupply};
