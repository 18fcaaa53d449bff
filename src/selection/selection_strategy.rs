use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose individuals from a population based on their
/// fitness scores. Individuals are cloned out of the population; for
/// [`Individual`](crate::expression::Individual) handles that is a reference
/// count bump, not a copy of the tree.
///
/// # Examples
///
/// ```
/// use exprgen::selection::{RouletteWheelSelection, SelectionStrategy};
/// use exprgen::rng::RandomNumberGenerator;
/// use exprgen::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec!["a", "b", "c"];
///     let fitness = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = RouletteWheelSelection::new();
///     let selected = selection.select(&population, &fitness, 2, &mut rng)?;
///
///     assert_eq!(selected.len(), 2);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug
where
    P: Clone,
{
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The fitness values cannot be turned into selection weights
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;

    /// Selects the two parents of the next offspring, independently and
    /// with replacement.
    fn select_parents(
        &self,
        population: &[P],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(P, P)> {
        let mut selected = self.select(population, fitness, 2, rng)?.into_iter();
        match (selected.next(), selected.next()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(GeneticError::EmptyPopulation),
        }
    }
}
