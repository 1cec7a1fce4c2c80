//! Generation errors.

use soroban_core::{ClassId, ConfigError};
use soroban_rng::SeedError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid seed: {0}")]
    Seed(#[from] SeedError),

    #[error(
        "No valid sequence for class {class} with {term_count} terms after {attempts} attempts"
    )]
    Exhausted {
        class: ClassId,
        term_count: usize,
        attempts: u32,
    },
}

impl GenerateError {
    /// Whether asking again (or with other parameters) may succeed.
    ///
    /// Only exhaustion is; bad input fails identically every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerateError::Exhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        let exhausted = GenerateError::Exhausted {
            class: ClassId::C3C,
            term_count: 3,
            attempts: 10,
        };
        assert!(exhausted.is_retryable());

        let invalid: GenerateError = ConfigError::UnknownClass("9Z".to_string()).into();
        assert!(!invalid.is_retryable());
    }

    #[test]
    fn test_messages() {
        let exhausted = GenerateError::Exhausted {
            class: ClassId::C2D,
            term_count: 4,
            attempts: 1000,
        };
        assert_eq!(
            exhausted.to_string(),
            "No valid sequence for class 2D with 4 terms after 1000 attempts"
        );
    }
}
