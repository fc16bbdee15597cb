//! Error types for the Genesis core

use thiserror::Error;

/// Core Genesis errors
///
/// All of these are local and recoverable. None of them is fatal to the
/// hosting process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenesisError {
    // Lifecycle errors
    #[error("Core not initialized")]
    NotInitialized,

    #[error("Core initialization failed")]
    InitializationFailed,

    #[error("Working memory reservation of {requested} bytes failed")]
    AllocationFailure { requested: usize },

    // Input errors
    #[error("Request is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GenesisError {
    /// Stable identifier used in error documents
    pub fn code(&self) -> &'static str {
        match self {
            GenesisError::NotInitialized => "not_initialized",
            GenesisError::InitializationFailed => "initialization_failed",
            GenesisError::AllocationFailure { .. } => "allocation_failure",
            GenesisError::InvalidEncoding { .. } => "invalid_encoding",
            GenesisError::InvalidInput(_) => "invalid_input",
            GenesisError::InvalidConfig(_) => "invalid_config",
        }
    }
}

/// Result type for Genesis operations
pub type GenesisResult<T> = Result<T, GenesisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            GenesisError::NotInitialized,
            GenesisError::InitializationFailed,
            GenesisError::AllocationFailure { requested: 1 },
            GenesisError::InvalidEncoding { valid_up_to: 0 },
            GenesisError::InvalidInput("x".into()),
            GenesisError::InvalidConfig("x".into()),
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_display() {
        let err = GenesisError::AllocationFailure { requested: 16 };
        assert_eq!(
            err.to_string(),
            "Working memory reservation of 16 bytes failed"
        );
    }
}
