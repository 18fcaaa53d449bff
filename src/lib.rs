//! Symbolic regression over small arithmetic expression trees.
//!
//! A genetic algorithm evolves a population of random expressions over the
//! integers 0 to 10 and the four arithmetic operators until the generation
//! budget runs out, then returns the expression whose value lies closest to
//! the target.
//!
//! ```rust
//! use exprgen::evolution::{EvolutionLauncher, EvolutionOptions};
//!
//! let options = EvolutionOptions::builder()
//!     .num_generations(100)
//!     .seed(42)
//!     .build();
//! let result = EvolutionLauncher::for_target(10.0)
//!     .evolve(&options, &mut options.make_rng())
//!     .unwrap();
//!
//! println!("{} = {:?}", result.expression, result.value);
//! ```

pub mod breeding;
pub mod error;
pub mod evolution;
pub mod expression;
pub mod generator;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use expression::{Expression, Individual, Operator, Tree};
