use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Each draw is
/// independent, so the same individual can be picked more than once.
///
/// This strategy requires all fitness values to be non-negative with a
/// strictly positive sum.
///
/// # Examples
///
/// ```
/// use exprgen::selection::{RouletteWheelSelection, SelectionStrategy};
/// use exprgen::rng::RandomNumberGenerator;
///
/// let population = vec![1, 2, 3, 4, 5];
/// let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = RouletteWheelSelection::new();
/// let (first, second) = selection.select_parents(&population, &fitness, &mut rng).unwrap();
/// assert!(population.contains(&first) && population.contains(&second));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy sampling with replacement.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes the fitness vector into cumulative selection probabilities.
    ///
    /// # Errors
    ///
    /// Returns an error if any fitness value is negative or not finite, or if
    /// all fitness values are zero.
    fn calculate_probabilities(&self, fitness: &[f64]) -> Result<Vec<f64>> {
        if fitness.iter().any(|&f| f < 0.0 || !f.is_finite()) {
            return Err(GeneticError::Selection(
                "Roulette wheel selection requires finite, non-negative fitness values".to_string(),
            ));
        }

        let sum: f64 = fitness.iter().sum();
        if sum <= 0.0 {
            return Err(GeneticError::Selection(
                "Roulette wheel selection requires at least one individual with non-zero fitness"
                    .to_string(),
            ));
        }

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = fitness
            .iter()
            .map(|&f| {
                cumulative += f / sum;
                cumulative
            })
            .collect();

        // Guard against rounding leaving the last bucket short of 1.0
        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        Ok(probs)
    }

    /// Spins the wheel once and returns the index of the selected individual.
    fn select_individual(&self, cumulative_probs: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.uniform();

        cumulative_probs
            .iter()
            .position(|&prob| r < prob)
            .unwrap_or(cumulative_probs.len() - 1)
    }
}

impl<P> SelectionStrategy<P> for RouletteWheelSelection
where
    P: Clone,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let cumulative_probs = self.calculate_probabilities(fitness)?;

        Ok((0..num_to_select)
            .map(|_| population[self.select_individual(&cumulative_probs, rng)].clone())
            .collect())
    }
}
