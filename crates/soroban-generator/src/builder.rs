//! One generation attempt.
//!
//! Samples each term uniformly from the class's candidate table and stops
//! at the first dead end: no legal move, or a running total outside the
//! class's range.

use soroban_core::{ClassConfig, Problem};
use soroban_rng::DrillRng;
use tracing::trace;

/// A fully built sequence, not yet structurally validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub numbers: Vec<i32>,
    /// Running total after each term
    pub steps: Vec<i32>,
    pub current: i32,
}

impl Attempt {
    pub fn into_problem(self) -> Problem {
        debug_assert_eq!(self.steps.last().copied(), Some(self.current));
        Problem {
            numbers: self.numbers,
            answer: self.current,
            steps: self.steps,
        }
    }
}

/// Why an attempt was abandoned. `term` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptAbort {
    NoCandidates { term: usize, total: i32 },
    OutOfRange { term: usize, total: i32 },
}

/// Builds candidate sequences for one class.
pub struct SequenceBuilder<'a> {
    config: &'a ClassConfig,
}

impl<'a> SequenceBuilder<'a> {
    pub fn new(config: &'a ClassConfig) -> Self {
        Self { config }
    }

    /// Run one attempt of `term_count` terms.
    pub fn build(&self, term_count: usize, rng: &mut DrillRng) -> Result<Attempt, AttemptAbort> {
        debug_assert!(term_count > 0, "Term count must be positive");

        let mut numbers = Vec::with_capacity(term_count);
        let mut steps = Vec::with_capacity(term_count);
        let mut current = 0;

        for term in 1..=term_count {
            let candidates = self.config.candidates(current, term == 1);
            let delta = rng.pick(candidates).ok_or(AttemptAbort::NoCandidates {
                term,
                total: current,
            })?;

            current += delta;
            trace!(class = %self.config.id, term, delta, current, "sampled term");

            if !self.config.in_range(current) {
                return Err(AttemptAbort::OutOfRange {
                    term,
                    total: current,
                });
            }

            numbers.push(delta);
            steps.push(current);
        }

        Ok(Attempt {
            numbers,
            steps,
            current,
        })
    }
}
