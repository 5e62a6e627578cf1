//! Error types for TourForge

use thiserror::Error;

/// Main error type for TourForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourForgeError {
    /// A caller passed arguments that violate a structural contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The working solution does not match what an operation expects
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for TourForge operations
pub type Result<T> = std::result::Result<T, TourForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let err = TourForgeError::InvalidArgument("odd endpoint count 3".to_string());
        assert_eq!(err.to_string(), "Invalid argument: odd endpoint count 3");

        let err = TourForgeError::InvalidState("element 7 not assigned".to_string());
        assert_eq!(err.to_string(), "Invalid state: element 7 not assigned");
    }
}
