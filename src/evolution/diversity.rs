use crate::expression::Individual;

/// Counts the unordered pairs of individuals whose cached values differ.
///
/// Reads only the caches, so the population must have been scored in the
/// current generation. Individuals that never evaluated successfully compare
/// equal to one another and different from every scored individual.
pub fn diversity(population: &[Individual]) -> usize {
    population
        .iter()
        .enumerate()
        .map(|(i, first)| {
            population[i + 1..]
                .iter()
                .filter(|second| first.cached() != second.cached())
                .count()
        })
        .sum()
}
