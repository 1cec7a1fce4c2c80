//! # soroban-generator
//!
//! Rejection-sampling generator for soroban practice problems.
//!
//! ## Generation
//!
//! 1. **Validate input**: the class must exist and the term count must lie in
//!    its declared range; otherwise fail before sampling.
//! 2. **Build**: sample every term uniformly from the class's candidate table,
//!    abandoning the attempt at a dead end or an out-of-range total.
//! 3. **Validate structure**: the class requirement must hold over the whole
//!    sequence.
//! 4. **Retry**: up to `max_attempts` times, then report exhaustion.
//!
//! ```text
//! (class, terms) ──> check range ──> SequenceBuilder ──> validate ──> Problem
//!                         │                 │                │
//!                   InvalidConfig     abort: retry     reject: retry
//!                                           └───────┬────────┘
//!                                          max_attempts ──> Exhausted
//! ```
//!
//! # Usage
//!
//! ```rust
//! use soroban_generator::{GeneratorConfig, ProblemGenerator};
//! use soroban_core::ClassId;
//!
//! let mut generator = ProblemGenerator::new(GeneratorConfig::default().with_seed(42)).unwrap();
//! let problem = generator.generate(ClassId::C3A, 5).unwrap();
//!
//! assert_eq!(problem.numbers.len(), 5);
//! assert_eq!(problem.answer, problem.numbers.iter().sum::<i32>());
//! assert!(problem.steps.windows(2).any(|w| w[0] < 10 && w[1] >= 10));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;

pub use builder::{Attempt, AttemptAbort, SequenceBuilder};
pub use config::{GeneratorConfig, MAX_ATTEMPTS_DEFAULT};
pub use error::GenerateError;
pub use generator::{GenerationReport, ProblemGenerator};

use soroban_core::Problem;

/// Generate one problem with default settings.
///
/// `class` is a class name such as `"2C"`. The seed comes from
/// `SOROBAN_SEED` or fresh entropy, so repeated calls differ.
pub fn generate(class: &str, term_count: usize) -> Result<Problem, GenerateError> {
    ProblemGenerator::new(GeneratorConfig::default())?.generate_named(class, term_count)
}
