//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable parameter of a search:
//! the expression depth, the population size, the generation budget, the seed,
//! the initial operator rates and how they adapt.
//!
//! ## Example
//!
//! ```rust
//! use exprgen::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Defaults: depth 3, ten individuals, 5000 generations
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 10);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .depth(4)
//!     .population_size(30)
//!     .num_generations(200)
//!     .seed(7)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ### `LogLevel`
//!
//! - `Verbose`: every generation's summary plus every individual with its score.
//! - `Minimal`: one summary event per generation.
//! - `None`: only the start and end of a run are logged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::breeding::MutationGate;
use crate::error::{GeneticError, Result};
use crate::evolution::rates::RateBounds;
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionOptions {
    depth: usize,
    population_size: usize,
    num_generations: usize,
    seed: Option<u64>,
    log_level: LogLevel,
    crossing_rate: f64,
    mutation_rate: f64,
    /// Share of the population size the diversity count must exceed for the
    /// population to count as diverse.
    diversity_ratio: f64,
    /// Relative change applied to the rates each generation.
    rate_step: f64,
    rate_bounds: RateBounds,
    mutation_gate: MutationGate,
}

impl EvolutionOptions {
    pub fn new(
        depth: usize,
        population_size: usize,
        num_generations: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            depth,
            population_size,
            num_generations,
            seed,
            ..Self::default()
        }
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_crossing_rate(&self) -> f64 {
        self.crossing_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_diversity_ratio(&self) -> f64 {
        self.diversity_ratio
    }

    pub fn get_rate_step(&self) -> f64 {
        self.rate_step
    }

    pub fn get_rate_bounds(&self) -> RateBounds {
        self.rate_bounds
    }

    pub fn get_mutation_gate(&self) -> MutationGate {
        self.mutation_gate
    }

    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_rate_bounds(&mut self, rate_bounds: RateBounds) {
        self.rate_bounds = rate_bounds;
    }

    pub fn set_mutation_gate(&mut self, mutation_gate: MutationGate) {
        self.mutation_gate = mutation_gate;
    }

    /// Creates the random source for a run: seeded when a seed is configured,
    /// from system entropy otherwise.
    pub fn make_rng(&self) -> RandomNumberGenerator {
        match self.seed {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        }
    }

    /// Checks that the options describe a runnable search.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - the depth is zero (individuals must be internal nodes)
    /// - the population holds fewer than two individuals (two slots are
    ///   replaced every generation)
    /// - a rate, the diversity ratio or the rate step is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(GeneticError::Configuration(
                "Expression depth must be at least 1".to_string(),
            ));
        }

        if self.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        let parameters = [
            ("crossing rate", self.crossing_rate),
            ("mutation rate", self.mutation_rate),
            ("diversity ratio", self.diversity_ratio),
            ("rate step", self.rate_step),
        ];
        for (name, value) in parameters {
            if !value.is_finite() || value < 0.0 {
                return Err(GeneticError::Configuration(format!(
                    "The {} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            depth: 3,
            population_size: 10,
            num_generations: 5000,
            seed: None,
            log_level: LogLevel::None,
            crossing_rate: 0.8,
            mutation_rate: 0.2,
            diversity_ratio: 0.8,
            rate_step: 0.1,
            rate_bounds: RateBounds::Unbounded,
            mutation_gate: MutationGate::AsWritten,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    depth: Option<usize>,
    population_size: Option<usize>,
    num_generations: Option<usize>,
    seed: Option<u64>,
    log_level: Option<LogLevel>,
    crossing_rate: Option<f64>,
    mutation_rate: Option<f64>,
    diversity_ratio: Option<f64>,
    rate_step: Option<f64>,
    rate_bounds: Option<RateBounds>,
    mutation_gate: Option<MutationGate>,
}

impl EvolutionOptionsBuilder {
    pub fn depth(mut self, value: usize) -> Self {
        self.depth = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the initial crossing rate.
    pub fn crossing_rate(mut self, value: f64) -> Self {
        self.crossing_rate = Some(value);
        self
    }

    /// Sets the initial mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn diversity_ratio(mut self, value: f64) -> Self {
        self.diversity_ratio = Some(value);
        self
    }

    pub fn rate_step(mut self, value: f64) -> Self {
        self.rate_step = Some(value);
        self
    }

    pub fn rate_bounds(mut self, value: RateBounds) -> Self {
        self.rate_bounds = Some(value);
        self
    }

    pub fn mutation_gate(mut self, value: MutationGate) -> Self {
        self.mutation_gate = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            depth: self.depth.unwrap_or(defaults.depth),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            seed: self.seed.or(defaults.seed),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            crossing_rate: self.crossing_rate.unwrap_or(defaults.crossing_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            diversity_ratio: self.diversity_ratio.unwrap_or(defaults.diversity_ratio),
            rate_step: self.rate_step.unwrap_or(defaults.rate_step),
            rate_bounds: self.rate_bounds.unwrap_or(defaults.rate_bounds),
            mutation_gate: self.mutation_gate.unwrap_or(defaults.mutation_gate),
        }
    }
}
