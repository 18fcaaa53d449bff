//! Adaptive crossover and mutation rates.

use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether adapted rates are kept inside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RateBounds {
    /// Rates are scaled freely and may leave `[0, 1]`.
    #[default]
    Unbounded,
    /// Both rates are clamped to `[0, 1]` after every adaptation.
    Clamped,
}

impl RateBounds {
    fn apply(self, rate: f64) -> f64 {
        match self {
            RateBounds::Unbounded => rate,
            RateBounds::Clamped => rate.clamp(0.0, 1.0),
        }
    }
}

/// The pair of operator rates steered by population diversity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveRates {
    crossing: f64,
    mutation: f64,
}

impl AdaptiveRates {
    pub fn new(crossing: f64, mutation: f64) -> Self {
        Self { crossing, mutation }
    }

    pub fn crossing(&self) -> f64 {
        self.crossing
    }

    pub fn mutation(&self) -> f64 {
        self.mutation
    }

    /// Shifts the balance between the operators by `step`.
    ///
    /// A diverse population gets more recombination and less mutation
    /// (`crossing *= 1 + step`, `mutation *= 1 - step`); a converged one gets
    /// the opposite.
    pub fn adapt(&mut self, diverse: bool, step: f64, bounds: RateBounds) {
        let (crossing_factor, mutation_factor) = if diverse {
            (1.0 + step, 1.0 - step)
        } else {
            (1.0 - step, 1.0 + step)
        };

        self.crossing = bounds.apply(self.crossing * crossing_factor);
        self.mutation = bounds.apply(self.mutation * mutation_factor);
        trace!(crossing = self.crossing, mutation = self.mutation, diverse, "rates adapted");
    }
}
