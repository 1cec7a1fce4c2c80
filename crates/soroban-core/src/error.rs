//! Configuration errors.

use crate::class::ClassId;

/// Invalid request: retrying with the same arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown difficulty class: {0:?}")]
    UnknownClass(String),

    #[error("Term count {requested} outside [{min}, {max}] for class {class}")]
    TermCountOutOfRange {
        class: ClassId,
        requested: usize,
        min: usize,
        max: usize,
    },
}
