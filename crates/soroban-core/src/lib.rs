//! # soroban-core
//!
//! Difficulty classes, bead-move tables and structural rules for soroban
//! (abacus) practice problems.
//!
//! ## Model
//!
//! | Piece | Role |
//! |-------|------|
//! | [`ClassId`] | One of the fixed difficulty classes, `1A`..`3E` |
//! | [`MoveKind`] | How a delta is made on the beads (direct, five/ten complement) |
//! | [`CandidateTable`] | Legal next deltas per running total, per class |
//! | [`Requirement`] | Conjunctive presence/absence rules over a sequence |
//! | [`ClassConfig`] | Tagged configuration record tying the above together |
//! | [`validate`] | Post-hoc requirement check of a built sequence |
//!
//! ## Usage
//!
//! ```rust
//! use soroban_core::{validate, ClassId};
//!
//! let class = ClassId::C2A.config();
//! assert_eq!(class.candidates(4, false), &[-4, -3, -2, -1, 1, 2, 3, 4, 5]);
//!
//! // 4 then +1 needs the five-complement this class drills.
//! assert!(validate(class, &[4, 1], &[4, 5]));
//! ```

pub mod bead;
pub mod class;
pub mod error;
pub mod problem;
pub mod registry;
pub mod rules;
pub mod table;
pub mod validator;

pub use bead::{classify, normalize, MoveKind};
pub use class::ClassId;
pub use error::ConfigError;
pub use problem::Problem;
pub use registry::{registry, resolve, ClassConfig};
pub use rules::{transitions, Category, Requirement, RequirementProgress, Rule, Transition};
pub use table::CandidateTable;
pub use validator::{check_sequence, validate, RuleResult, SequenceReport};
