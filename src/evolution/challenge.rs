//! # Challenge
//!
//! A challenge scores an individual; higher is better. [`TargetChallenge`]
//! is the fitness function of the search: closeness of the individual's value
//! to a numeric target.

use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::expression::Expression;

/// Difference charged to an individual whose evaluation divides by zero.
pub const DIVISION_PENALTY: f64 = 1000.0;

pub trait Challenge {
    /// Scores an individual. Scoring may record the evaluated value in the
    /// individual's cache.
    ///
    /// # Errors
    ///
    /// Returns an error when the individual cannot be scored at all; the
    /// search stops with that error.
    fn score(&self, individual: &Expression) -> Result<f64>;
}

/// Scores individuals by `1 / (|value - target| + 1)`.
///
/// The score lies in `(0, 1]` and reaches `1` only on an exact match. A
/// division by zero is not an error here: it is charged a fixed difference
/// (1000 by default) and the cache keeps its previous value. Any other
/// evaluation error is returned unchanged.
///
/// # Example
///
/// ```
/// use exprgen::evolution::{Challenge, TargetChallenge};
/// use exprgen::expression::Expression;
///
/// let challenge = TargetChallenge::new(14.0);
/// let exact: Expression = "((3 + 4) * 2)".parse().unwrap();
/// let broken: Expression = "(1 / (2 - 2))".parse().unwrap();
///
/// assert_eq!(challenge.score(&exact), Ok(1.0));
/// assert_eq!(exact.cached(), Some(14.0));
/// assert_eq!(challenge.score(&broken), Ok(1.0 / 1001.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetChallenge {
    target: f64,
    division_penalty: f64,
}

impl TargetChallenge {
    pub fn new(target: f64) -> Self {
        Self::with_penalty(target, DIVISION_PENALTY)
    }

    pub fn with_penalty(target: f64, division_penalty: f64) -> Self {
        Self {
            target,
            division_penalty,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn division_penalty(&self) -> f64 {
        self.division_penalty
    }

    /// Turns the outcome of an evaluation into a score.
    pub fn fitness(&self, evaluation: Result<f64>) -> Result<f64> {
        let difference = match evaluation {
            Ok(value) => (value - self.target).abs(),
            Err(GeneticError::DivisionByZero) => self.division_penalty,
            Err(e) => return Err(e),
        };

        Ok(1.0 / (difference + 1.0))
    }
}

impl Challenge for TargetChallenge {
    fn score(&self, individual: &Expression) -> Result<f64> {
        let evaluation = individual.evaluate();
        match &evaluation {
            Ok(value) => individual.set_cached(*value),
            Err(GeneticError::DivisionByZero) => {
                trace!(%individual, "division by zero, applying penalty");
            }
            Err(_) => {}
        }

        self.fitness(evaluation)
    }
}
