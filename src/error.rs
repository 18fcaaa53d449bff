//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Evaluation,
//! parsing, selection and configuration failures all surface as a
//! [`GeneticError`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use exprgen::error::{GeneticError, Result};
//!
//! fn checked_divide(a: f64, b: f64) -> Result<f64> {
//!     if b == 0.0 {
//!         return Err(GeneticError::DivisionByZero);
//!     }
//!     Ok(a / b)
//! }
//!
//! assert!(checked_divide(1.0, 0.0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use exprgen::error::{GeneticError, OptionExt};
//!
//! fn best(scores: &[u32]) -> exprgen::error::Result<u32> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while building, evaluating or evolving
/// expression trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A division node whose right operand evaluated to exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness vector cannot drive selection.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when an infix expression cannot be parsed.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for expression and evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(GeneticError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            GeneticError::Configuration("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
        let parse = GeneticError::Parse {
            position: 3,
            message: "expected ')'".to_string(),
        };
        assert_eq!(parse.to_string(), "Parse error at position 3: expected ')'");
    }

    #[test]
    fn test_option_ext() {
        let none: Option<u8> = None;
        assert_eq!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        );
        assert_eq!(Some(4).ok_or_else_genetic(|| GeneticError::EmptyPopulation), Ok(4));
    }
}
