//! # Breeding
//!
//! The two genetic operators. Both are gated by a rate and both build new
//! root nodes that share the untouched subtrees of their parents.

pub mod crossover;
pub mod mutation;

pub use crossover::cross;
pub use mutation::{Mutation, MutationGate};
