//! # soroban-rng
//!
//! Seeded random source for drill generation.
//!
//! Every generator owns its own [`DrillRng`]; nothing is shared between
//! requests. A fixed seed replays the same problems, which makes failing
//! property tests and reported bad questions reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use soroban_rng::DrillRng;
//!
//! let mut rng = DrillRng::new(7);
//! let term = rng.pick(&[1, 2, 3, 4]).unwrap();
//! assert!((1..=4).contains(&term));
//! ```
//!
//! ## Reproducibility
//!
//! ```bash
//! SOROBAN_SEED=12345 soroban-gen generate 3A 5
//! ```

pub mod random;
pub mod seed;

pub use random::DrillRng;
pub use seed::{resolve_seed, resolve_seed_with, SeedError, SEED_ENV};
