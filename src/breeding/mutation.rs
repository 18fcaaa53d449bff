use std::rc::Rc;

use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::expression::{Expression, Individual};
use crate::generator::Generator;
use crate::rng::RandomNumberGenerator;

/// How the mutation rate gates the operator.
///
/// `AsWritten` keeps the individual unchanged when the draw is *below* the
/// rate, so a higher rate means fewer mutations. `Inverted` mutates when the
/// draw is below the rate, which is what the name suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MutationGate {
    #[default]
    AsWritten,
    Inverted,
}

impl MutationGate {
    /// Whether a draw against `rate` leaves the individual untouched.
    pub fn skips(self, draw: f64, rate: f64) -> bool {
        match self {
            MutationGate::AsWritten => draw < rate,
            MutationGate::Inverted => draw >= rate,
        }
    }
}

/// Subtree-replacement mutation.
#[derive(Debug, Clone, Copy)]
pub struct Mutation {
    generator: Generator,
    gate: MutationGate,
}

impl Mutation {
    pub fn new(generator: Generator, gate: MutationGate) -> Self {
        Self { generator, gate }
    }

    pub fn gate(&self) -> MutationGate {
        self.gate
    }

    /// Perturbs one individual.
    ///
    /// Unless the gate skips the draw, one side picked uniformly at random is
    /// replaced by a fresh subtree one level shallower than a whole individual.
    /// The operator and the other child are kept as shared handles.
    pub fn mutate(
        &self,
        individual: &Individual,
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        let draw = rng.uniform();
        if self.gate.skips(draw, mutation_rate) {
            trace!(draw, mutation_rate, "mutation skipped");
            return Rc::clone(individual);
        }

        let fresh = self.generator.generate_subtree(rng);
        let (left, right) = if rng.uniform() > 0.5 {
            (fresh, individual.right().clone())
        } else {
            (individual.left().clone(), fresh)
        };

        Rc::new(Expression::new(individual.op(), left, right))
    }
}
