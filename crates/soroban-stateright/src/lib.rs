//! # soroban-stateright
//!
//! Stateright models of each difficulty class's transition system.
//!
//! A model explores every sequence the candidate table allows for one class
//! and term count, which lets the model checker prove two things sampling
//! cannot:
//!
//! - **NoForbiddenTransition**: the table never offers a move that the class's
//!   absence rules forbid.
//! - **Completes**: some in-range sequence of exactly that length meets the
//!   class requirement, so generation can succeed at all.

pub mod drill;

pub use drill::{DrillModel, DrillState};
