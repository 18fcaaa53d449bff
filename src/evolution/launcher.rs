use std::cmp::Ordering;

use tracing::{debug, info};

use super::{
    challenge::{Challenge, TargetChallenge},
    diversity::diversity,
    options::{EvolutionOptions, LogLevel},
    rates::AdaptiveRates,
};
use crate::{
    breeding::{cross, Mutation},
    error::{GeneticError, OptionExt, Result},
    expression::Individual,
    generator::Generator,
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

/// The outcome of a search: the fittest individual of the final population.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The winning expression.
    pub expression: Individual,
    /// Its fitness score.
    pub score: f64,
    /// Its value, or `None` if it divides by zero.
    pub value: Option<f64>,
    /// Operator rates after the last adaptation.
    pub crossing_rate: f64,
    pub mutation_rate: f64,
    /// Diversity of the population in the last generation.
    pub diversity: usize,
    /// The final population, by ascending fitness; the winner is last.
    pub population: Vec<Individual>,
}

/// A population between two generations.
#[derive(Debug)]
struct Generation {
    population: Vec<Individual>,
    /// Diversity measured before breeding.
    diversity: usize,
}

/// Writes the crossover child over the weakest member of an ascending ranking
/// and the mutation child over the second weakest.
fn replace(
    ranked: Vec<(Individual, f64)>,
    crossing_child: Individual,
    mutation_child: Individual,
) -> Vec<Individual> {
    [crossing_child, mutation_child]
        .into_iter()
        .chain(ranked.into_iter().skip(2).map(|(individual, _)| individual))
        .collect()
}

/// Runs the generational search using a selection strategy and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Chall, Select>
where
    Chall: Challenge,
    Select: SelectionStrategy<Individual>,
{
    challenge: Chall,
    selection: Select,
}

impl EvolutionLauncher<TargetChallenge, RouletteWheelSelection> {
    /// A launcher searching for an expression that evaluates to `target`,
    /// using roulette wheel selection.
    pub fn for_target(target: f64) -> Self {
        Self::new(TargetChallenge::new(target), RouletteWheelSelection::new())
    }
}

impl<Chall, Select> EvolutionLauncher<Chall, Select>
where
    Chall: Challenge,
    Select: SelectionStrategy<Individual>,
{
    pub fn new(challenge: Chall, selection: Select) -> Self {
        Self {
            challenge,
            selection,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a random population for the configured number of generations.
    ///
    /// Each generation scores every individual, adapts the operator rates to
    /// the population's diversity, breeds one crossover child and one mutation
    /// child from two roulette-selected parents, and writes them over the two
    /// weakest individuals. There is no early stop on an exact match.
    ///
    /// Once the budget is spent the final population is scored and ranked one
    /// last time and its fittest member is returned.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The challenge fails to score an individual
    /// - Parent selection fails
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let population_size = options.get_population_size();
        let generator = Generator::new(options.get_depth());
        let mutation = Mutation::new(generator, options.get_mutation_gate());

        let mut rates = AdaptiveRates::new(options.get_crossing_rate(), options.get_mutation_rate());
        let mut population = generator.generate_population(population_size, rng);
        let mut last_diversity = 0;

        info!(
            population_size,
            depth = options.get_depth(),
            generations = options.get_num_generations(),
            "starting evolution"
        );

        for generation in 0..options.get_num_generations() {
            let next = self.step(population, &mut rates, &mutation, options, generation, rng)?;
            population = next.population;
            last_diversity = next.diversity;
        }

        let ranked = self.rank(population)?;
        let (expression, score) = ranked
            .last()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let population = ranked.into_iter().map(|(individual, _)| individual).collect();
        let value = expression.evaluate().ok();

        info!(%expression, score, ?value, "evolution finished");

        Ok(EvolutionResult {
            expression,
            score,
            value,
            crossing_rate: rates.crossing(),
            mutation_rate: rates.mutation(),
            diversity: last_diversity,
            population,
        })
    }

    /// Runs one generation and returns the population that enters the next.
    ///
    /// The population is diverse when more than `len * diversity_ratio` pairs
    /// hold different values; a diverse population raises the crossing rate
    /// and lowers the mutation rate, anything else does the opposite.
    fn step(
        &self,
        population: Vec<Individual>,
        rates: &mut AdaptiveRates,
        mutation: &Mutation,
        options: &EvolutionOptions,
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Generation> {
        let fitness = population
            .iter()
            .map(|individual| self.challenge.score(individual))
            .collect::<Result<Vec<f64>>>()?;

        let diversity = diversity(&population);
        let diversity_threshold = population.len() as f64 * options.get_diversity_ratio();
        rates.adapt(
            diversity as f64 > diversity_threshold,
            options.get_rate_step(),
            options.get_rate_bounds(),
        );

        let (parent1, parent2) = self
            .selection
            .select_parents(&population, &fitness, rng)
            .map_err(|e| {
                GeneticError::Evolution(format!(
                    "Failed to select parents in generation {}: {}",
                    generation, e
                ))
            })?;
        let crossing_child = cross(&parent1, &parent2, rates.crossing(), rng);
        let mutation_parent = rng.choose(&parent1, &parent2);
        let mutation_child = mutation.mutate(mutation_parent, rates.mutation(), rng);

        let ranked = self.rank(population)?;
        self.log_generation(options.get_log_level(), generation, &ranked, diversity, rates);

        Ok(Generation {
            population: replace(ranked, crossing_child, mutation_child),
            diversity,
        })
    }

    /// Rescores the population and sorts it by ascending fitness. The sort is
    /// stable, so equally fit individuals keep their relative order.
    fn rank(&self, population: Vec<Individual>) -> Result<Vec<(Individual, f64)>> {
        let mut ranked = population
            .into_iter()
            .map(|individual| {
                let score = self.challenge.score(&individual)?;
                Ok((individual, score))
            })
            .collect::<Result<Vec<(Individual, f64)>>>()?;

        ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        Ok(ranked)
    }

    fn log_generation(
        &self,
        log_level: &LogLevel,
        generation: usize,
        ranked: &[(Individual, f64)],
        diversity: usize,
        rates: &AdaptiveRates,
    ) {
        if *log_level == LogLevel::None {
            return;
        }

        if let Some((best, best_score)) = ranked.last() {
            debug!(
                generation,
                best = %best,
                best_score,
                diversity,
                crossing_rate = rates.crossing(),
                mutation_rate = rates.mutation(),
                "generation complete"
            );
        }

        if *log_level == LogLevel::Verbose {
            for (individual, score) in ranked {
                debug!(generation, %individual, score, value = ?individual.cached(), "individual");
            }
        }
    }
}
