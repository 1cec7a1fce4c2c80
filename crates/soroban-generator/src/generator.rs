//! Problem generator with bounded retry.
//!
//! Implements the build → validate → retry cycle: each attempt samples a
//! whole sequence, the first one that also meets the class requirement is
//! returned, and the attempt budget bounds the runtime.

use std::fmt;

use soroban_core::{validate, ClassConfig, ClassId, Problem};
use soroban_rng::{resolve_seed, DrillRng};
use tracing::{debug, warn};

use crate::builder::{AttemptAbort, SequenceBuilder};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;

/// What it took to produce one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub class: ClassId,
    pub term_count: usize,
    /// Attempts made, including the successful one
    pub attempts: u32,
    /// Attempts stopped by an empty candidate set
    pub no_candidates: u32,
    /// Attempts stopped by a running total outside the class range
    pub out_of_range: u32,
    /// Complete sequences rejected by the class requirement
    pub rejected: u32,
    /// Seed of the generator that produced the problem
    pub seed: u64,
}

impl GenerationReport {
    fn new(class: ClassId, term_count: usize, seed: u64) -> Self {
        Self {
            class,
            term_count,
            attempts: 0,
            no_candidates: 0,
            out_of_range: 0,
            rejected: 0,
            seed,
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class={} terms={} attempts={} no_candidates={} out_of_range={} rejected={} SOROBAN_SEED={}",
            self.class,
            self.term_count,
            self.attempts,
            self.no_candidates,
            self.out_of_range,
            self.rejected,
            self.seed
        )
    }
}

/// Generates problems for any class.
///
/// Owns its random source; give each request or thread its own generator
/// (see [`ProblemGenerator::fork`]).
#[derive(Debug)]
pub struct ProblemGenerator {
    config: GeneratorConfig,
    rng: DrillRng,
}

impl ProblemGenerator {
    /// Create a generator, resolving the seed from the config, `SOROBAN_SEED`
    /// or entropy.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        let seed = resolve_seed(config.seed)?;
        Ok(Self::with_rng(config, DrillRng::new(seed)))
    }

    pub fn with_rng(config: GeneratorConfig, rng: DrillRng) -> Self {
        Self { config, rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// An independent generator with the same config and a derived seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::with_rng(self.config.clone(), self.rng.fork())
    }

    /// Generate one problem.
    pub fn generate(
        &mut self,
        class: ClassId,
        term_count: usize,
    ) -> Result<Problem, GenerateError> {
        self.generate_with_report(class, term_count)
            .map(|(problem, _)| problem)
    }

    /// Generate one problem for a class given by name ("2C").
    pub fn generate_named(
        &mut self,
        class: &str,
        term_count: usize,
    ) -> Result<Problem, GenerateError> {
        let id: ClassId = class.parse()?;
        self.generate(id, term_count)
    }

    pub fn generate_with_report(
        &mut self,
        class: ClassId,
        term_count: usize,
    ) -> Result<(Problem, GenerationReport), GenerateError> {
        self.generate_for(class.config(), term_count)
    }

    /// Generate one problem against an explicit class configuration.
    ///
    /// Rejects an out-of-range term count before sampling anything.
    pub fn generate_for(
        &mut self,
        class: &ClassConfig,
        term_count: usize,
    ) -> Result<(Problem, GenerationReport), GenerateError> {
        class.check_term_count(term_count)?;

        let builder = SequenceBuilder::new(class);
        let mut report = GenerationReport::new(class.id, term_count, self.rng.seed());

        for attempt in 1..=self.config.max_attempts {
            report.attempts = attempt;

            let built = match builder.build(term_count, &mut self.rng) {
                Ok(built) => built,
                Err(abort) => {
                    match abort {
                        AttemptAbort::NoCandidates { .. } => report.no_candidates += 1,
                        AttemptAbort::OutOfRange { .. } => report.out_of_range += 1,
                    }
                    debug!(class = %class.id, attempt, ?abort, "attempt aborted");
                    continue;
                }
            };

            if !validate(class, &built.numbers, &built.steps) {
                report.rejected += 1;
                debug!(class = %class.id, attempt, numbers = ?built.numbers, "requirement not met");
                continue;
            }

            debug!(%report, "problem generated");
            return Ok((built.into_problem(), report));
        }

        warn!(%report, "attempts exhausted");
        Err(GenerateError::Exhausted {
            class: class.id,
            term_count,
            attempts: self.config.max_attempts,
        })
    }

    /// Generate a homework set of `count` problems.
    ///
    /// Fails as a whole if any single problem cannot be generated.
    pub fn generate_batch(
        &mut self,
        class: ClassId,
        term_count: usize,
        count: usize,
    ) -> Result<Vec<Problem>, GenerateError> {
        class.config().check_term_count(term_count)?;
        (0..count).map(|_| self.generate(class, term_count)).collect()
    }
}
