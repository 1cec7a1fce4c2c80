//! Generator configuration presets.

/// Default number of attempts before giving up on a problem.
pub const MAX_ATTEMPTS_DEFAULT: u32 = 1000;

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attempts per problem before reporting exhaustion
    pub max_attempts: u32,
    /// Fixed seed; `None` falls back to `SOROBAN_SEED`, then entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS_DEFAULT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Few attempts, for interactive use where a fast failure beats a wait.
    pub fn quick() -> Self {
        Self {
            max_attempts: 100,
            ..Default::default()
        }
    }

    /// Many attempts, for classes whose requirement is rarely met by chance.
    pub fn thorough() -> Self {
        Self {
            max_attempts: 10_000,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        debug_assert!(max_attempts > 0, "At least one attempt is required");
        self.max_attempts = max_attempts;
        self
    }
}
