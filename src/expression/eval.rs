use super::{Expression, Operator, Tree};
use crate::error::{GeneticError, Result};

impl Operator {
    /// Applies the operator to two evaluated operands.
    ///
    /// Division is true division; a right operand of exactly zero yields
    /// [`GeneticError::DivisionByZero`].
    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div if right == 0.0 => Err(GeneticError::DivisionByZero),
            Operator::Div => Ok(left / right),
        }
    }
}

impl Tree {
    /// Recursively computes the value of the tree.
    ///
    /// Does not touch any cache; recording results is the fitness function's job.
    pub fn evaluate(&self) -> Result<f64> {
        match self {
            Tree::Leaf(value) => Ok(*value as f64),
            Tree::Node(expression) => expression.evaluate(),
        }
    }
}

impl Expression {
    /// Evaluates both children and applies the operator.
    pub fn evaluate(&self) -> Result<f64> {
        let left = self.left.evaluate()?;
        let right = self.right.evaluate()?;
        self.op.apply(left, right)
    }
}
