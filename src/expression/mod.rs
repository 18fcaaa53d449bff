//! # Expression Trees
//!
//! An expression is a binary tree whose internal nodes hold one of the four
//! arithmetic operators and whose leaves are small integer constants.
//!
//! Subtrees are shared between parents and offspring through reference
//! counting: crossover and mutation build new root nodes and reuse the
//! untouched children of their parents. Nodes are never modified after
//! construction, except for the cached evaluation result that the fitness
//! function records on the root of every scored individual.
//!
//! ## Example
//!
//! ```rust
//! use exprgen::expression::{Expression, Operator, Tree};
//!
//! let sum = Expression::new(Operator::Add, Tree::Leaf(3), Tree::Leaf(4));
//! let product = Expression::new(Operator::Mul, Tree::node(sum), Tree::Leaf(2));
//!
//! assert_eq!(product.to_string(), "((3 + 4) * 2)");
//! assert_eq!(product.evaluate().unwrap(), 14.0);
//! ```

mod eval;
mod parse;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A population member. Individuals are always internal nodes, so the genetic
/// operators can rely on every individual having an operator and two children.
pub type Individual = Rc<Expression>;

/// The four binary operators an internal node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order used for uniform random picks.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The infix symbol of the operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Looks an operator up by its infix symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Either an integer leaf or a shared internal node.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(i64),
    Node(Individual),
}

impl Tree {
    /// Wraps an expression into a tree node.
    pub fn node(expression: Expression) -> Self {
        Tree::Node(Rc::new(expression))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Height of the tree: a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node(expression) => expression.depth(),
        }
    }

    /// Number of nodes, leaves included.
    pub fn size(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node(expression) => expression.size(),
        }
    }
}

impl From<Individual> for Tree {
    fn from(expression: Individual) -> Self {
        Tree::Node(expression)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(value) => write!(f, "{}", value),
            Tree::Node(expression) => write!(f, "{}", expression),
        }
    }
}

/// An internal node: an operator applied to two subtrees.
#[derive(Debug, Clone)]
pub struct Expression {
    op: Operator,
    left: Tree,
    right: Tree,
    /// Result of the last successful fitness evaluation of this node.
    cache: Cell<Option<f64>>,
}

impl Expression {
    pub fn new(op: Operator, left: Tree, right: Tree) -> Self {
        Self {
            op,
            left,
            right,
            cache: Cell::new(None),
        }
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn left(&self) -> &Tree {
        &self.left
    }

    pub fn right(&self) -> &Tree {
        &self.right
    }

    /// The value recorded by the last fitness evaluation, if any.
    ///
    /// Only meaningful once the individual has been scored in the current
    /// generation. Individuals whose evaluation failed keep whatever value
    /// they held before (initially `None`).
    pub fn cached(&self) -> Option<f64> {
        self.cache.get()
    }

    /// Records an evaluation result, overwriting any previous value.
    pub fn set_cached(&self, value: f64) {
        self.cache.set(Some(value));
    }

    pub fn depth(&self) -> usize {
        1 + self.left.depth().max(self.right.depth())
    }

    pub fn size(&self) -> usize {
        1 + self.left.size() + self.right.size()
    }
}

/// Structural equality; the cache is ignored.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.left == other.left && self.right == other.right
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expression {
        let sum = Expression::new(Operator::Add, Tree::Leaf(3), Tree::Leaf(4));
        Expression::new(Operator::Mul, Tree::node(sum), Tree::Leaf(2))
    }

    #[test]
    fn test_display_is_parenthesized_infix() {
        assert_eq!(sample().to_string(), "((3 + 4) * 2)");
        assert_eq!(Tree::Leaf(7).to_string(), "7");
    }

    #[test]
    fn test_depth_and_size() {
        let expression = sample();
        assert_eq!(expression.depth(), 2);
        assert_eq!(expression.size(), 5);
        assert_eq!(Tree::Leaf(1).depth(), 0);
    }

    #[test]
    fn test_cache_starts_unset_and_is_overwritten() {
        let expression = sample();
        assert_eq!(expression.cached(), None);

        expression.set_cached(14.0);
        assert_eq!(expression.cached(), Some(14.0));

        expression.set_cached(3.5);
        assert_eq!(expression.cached(), Some(3.5));
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = sample();
        let b = sample();
        a.set_cached(14.0);
        assert_eq!(a, b);

        let c = Expression::new(Operator::Sub, Tree::Leaf(3), Tree::Leaf(4));
        assert_ne!(a, c);
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn test_shared_subtree_is_not_copied() {
        let shared = Rc::new(Expression::new(Operator::Add, Tree::Leaf(1), Tree::Leaf(2)));
        let a = Expression::new(Operator::Mul, Tree::Node(Rc::clone(&shared)), Tree::Leaf(3));
        let b = Expression::new(Operator::Sub, Tree::Leaf(4), Tree::Node(Rc::clone(&shared)));

        match (a.left(), b.right()) {
            (Tree::Node(x), Tree::Node(y)) => assert!(Rc::ptr_eq(x, y)),
            _ => panic!("expected shared internal nodes"),
        }
        assert_eq!(Rc::strong_count(&shared), 3);
    }
}
