use std::rc::Rc;

use tracing::trace;

use crate::expression::{Expression, Individual};
use crate::rng::RandomNumberGenerator;

/// Recombines two parents into one offspring.
///
/// A uniform draw in `[0, 1)` above `crossing_rate` skips recombination and
/// hands back one of the parents (the same handle, not a copy). Otherwise the
/// child takes its operator, its left child and its right child each from a
/// uniformly chosen parent, independently of one another.
///
/// A rate of `1.0` or more therefore always recombines, a rate below `0.0`
/// never does.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use exprgen::breeding::cross;
/// use exprgen::expression::Expression;
/// use exprgen::rng::RandomNumberGenerator;
///
/// let a: Rc<Expression> = Rc::new("(1 + 2)".parse().unwrap());
/// let b: Rc<Expression> = Rc::new("(3 * 4)".parse().unwrap());
/// let mut rng = RandomNumberGenerator::from_seed(0);
///
/// let child = cross(&a, &b, 1.0, &mut rng);
/// assert!(!Rc::ptr_eq(&child, &a) && !Rc::ptr_eq(&child, &b));
/// ```
pub fn cross(
    parent1: &Individual,
    parent2: &Individual,
    crossing_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Individual {
    let draw = rng.uniform();
    if draw > crossing_rate {
        trace!(draw, crossing_rate, "crossover skipped");
        return Rc::clone(rng.choose(parent1, parent2));
    }

    let op = rng.choose(parent1.op(), parent2.op());
    let left = rng.choose(parent1.left(), parent2.left()).clone();
    let right = rng.choose(parent1.right(), parent2.right()).clone();

    Rc::new(Expression::new(op, left, right))
}
