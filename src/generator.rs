//! # Generator
//!
//! Builds random expression trees of bounded depth. Every internal node picks
//! its operator uniformly from [`Operator::ALL`], every leaf picks its value
//! uniformly from [`LEAF_MIN`]`..=`[`LEAF_MAX`].
//!
//! ## Example
//!
//! ```rust
//! use exprgen::generator::Generator;
//! use exprgen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let generator = Generator::new(3);
//!
//! let population = generator.generate_population(10, &mut rng);
//! assert_eq!(population.len(), 10);
//! assert!(population.iter().all(|individual| individual.depth() <= 3));
//! ```

use std::rc::Rc;

use crate::expression::{Expression, Individual, Operator, Tree};
use crate::rng::RandomNumberGenerator;

/// Smallest leaf constant.
pub const LEAF_MIN: i64 = 0;
/// Largest leaf constant.
pub const LEAF_MAX: i64 = 10;

/// Random tree factory with a fixed maximum depth for whole individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    max_depth: usize,
}

impl Generator {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Generates a full tree of the given depth.
    ///
    /// A depth of zero yields a leaf; anything larger yields an internal node
    /// whose children are generated with `depth - 1`.
    pub fn generate(&self, depth: usize, rng: &mut RandomNumberGenerator) -> Tree {
        if depth == 0 {
            Tree::Leaf(rng.gen_range(LEAF_MIN..=LEAF_MAX))
        } else {
            Tree::Node(self.generate_expression(depth, rng))
        }
    }

    /// Generates an internal node of the given depth. Depth 0 is treated as 1,
    /// since an internal node always has at least one level of children.
    pub fn generate_expression(&self, depth: usize, rng: &mut RandomNumberGenerator) -> Individual {
        let child_depth = depth.saturating_sub(1);
        let op = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
        let left = self.generate(child_depth, rng);
        let right = self.generate(child_depth, rng);
        Rc::new(Expression::new(op, left, right))
    }

    /// Generates a subtree sized to replace one child of an individual.
    pub fn generate_subtree(&self, rng: &mut RandomNumberGenerator) -> Tree {
        self.generate(self.max_depth.saturating_sub(1), rng)
    }

    /// Generates `size` independent individuals of the configured maximum depth.
    pub fn generate_population(&self, size: usize, rng: &mut RandomNumberGenerator) -> Vec<Individual> {
        (0..size)
            .map(|_| self.generate_expression(self.max_depth, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves_in_range(tree: &Tree) -> bool {
        match tree {
            Tree::Leaf(value) => (LEAF_MIN..=LEAF_MAX).contains(value),
            Tree::Node(expression) => {
                leaves_in_range(expression.left()) && leaves_in_range(expression.right())
            }
        }
    }

    #[test]
    fn test_generate_zero_is_leaf_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let generator = Generator::new(3);
        for _ in 0..200 {
            match generator.generate(0, &mut rng) {
                Tree::Leaf(value) => assert!((LEAF_MIN..=LEAF_MAX).contains(&value)),
                other => panic!("expected a leaf, got {}", other),
            }
        }
    }

    #[test]
    fn test_generate_positive_depth_is_full_tree() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let generator = Generator::new(3);
        for depth in 1..=4 {
            let tree = generator.generate(depth, &mut rng);
            assert!(!tree.is_leaf());
            assert_eq!(tree.depth(), depth);
            assert_eq!(tree.size(), (1 << (depth + 1)) - 1);
            assert!(leaves_in_range(&tree));
        }
    }

    #[test]
    fn test_generate_population() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let generator = Generator::new(3);
        let population = generator.generate_population(25, &mut rng);

        assert_eq!(population.len(), 25);
        for individual in &population {
            assert_eq!(individual.depth(), 3);
            assert_eq!(individual.cached(), None);
        }
    }

    #[test]
    fn test_generate_subtree_is_one_level_shallower() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let generator = Generator::new(3);
        assert_eq!(generator.generate_subtree(&mut rng).depth(), 2);

        let shallow = Generator::new(1);
        assert!(shallow.generate_subtree(&mut rng).is_leaf());
    }

    #[test]
    fn test_all_operators_appear() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let generator = Generator::new(1);
        let ops: Vec<Operator> = generator
            .generate_population(200, &mut rng)
            .iter()
            .map(|individual| individual.op())
            .collect();

        for op in Operator::ALL {
            assert!(ops.contains(&op), "operator {} never generated", op);
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let generator = Generator::new(3);
        let a = generator.generate_population(5, &mut RandomNumberGenerator::from_seed(5));
        let b = generator.generate_population(5, &mut RandomNumberGenerator::from_seed(5));
        assert_eq!(a, b);
    }
}
