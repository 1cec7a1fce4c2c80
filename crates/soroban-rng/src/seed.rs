//! Seed resolution: explicit, then environment, then entropy.

/// Environment variable that pins the generator seed.
pub const SEED_ENV: &str = "SOROBAN_SEED";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("SOROBAN_SEED must be a valid u64, got {0:?}")]
    InvalidEnv(String),
}

/// Pick the seed for a generator.
///
/// An explicit seed wins; otherwise `SOROBAN_SEED` if set; otherwise fresh
/// entropy.
pub fn resolve_seed(explicit: Option<u64>) -> Result<u64, SeedError> {
    resolve_seed_with(explicit, |key| std::env::var(key).ok())
}

/// [`resolve_seed`] with the environment lookup supplied by the caller.
pub fn resolve_seed_with<F>(explicit: Option<u64>, lookup: F) -> Result<u64, SeedError>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(seed) = explicit {
        return Ok(seed);
    }
    match lookup(SEED_ENV) {
        Some(value) => parse_seed(&value),
        None => Ok(rand::random::<u64>()),
    }
}

fn parse_seed(value: &str) -> Result<u64, SeedError> {
    value
        .trim()
        .parse()
        .map_err(|_| SeedError::InvalidEnv(value.to_string()))
}
