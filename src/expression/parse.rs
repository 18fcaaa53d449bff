//! Parser for the parenthesized infix form produced by `Display`.
//!
//! Grammar (whitespace allowed between tokens):
//!
//! ```text
//! tree     := integer | '(' tree operator tree ')'
//! integer  := '-'? digit+
//! operator := '+' | '-' | '*' | '/'
//! ```
//!
//! A `-` directly in front of a digit is a sign only where a tree is
//! expected, so `(1 - -2)` and `(1--2)` both read as one minus negative two.

use std::rc::Rc;
use std::str::FromStr;

use super::{Expression, Operator, Tree};
use crate::error::{GeneticError, Result};

struct Parser<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            position: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> GeneticError {
        GeneticError::Parse {
            position: self.position,
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .input
            .get(self.position)
            .is_some_and(|byte| byte.is_ascii_whitespace())
        {
            self.position += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.get(self.position).copied()
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        match self.peek() {
            Some(byte) if byte == expected => {
                self.position += 1;
                Ok(())
            }
            Some(byte) => Err(self.error(format!(
                "expected '{}', found '{}'",
                expected as char, byte as char
            ))),
            None => Err(self.error(format!("expected '{}', found end of input", expected as char))),
        }
    }

    fn tree(&mut self) -> Result<Tree> {
        match self.peek() {
            Some(b'(') => Ok(Tree::Node(Rc::new(self.expression()?))),
            Some(byte) if byte == b'-' || byte.is_ascii_digit() => self.leaf(),
            Some(byte) => Err(self.error(format!("unexpected '{}'", byte as char))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.expect(b'(')?;
        let left = self.tree()?;
        let op = self.operator()?;
        let right = self.tree()?;
        self.expect(b')')?;
        Ok(Expression::new(op, left, right))
    }

    fn operator(&mut self) -> Result<Operator> {
        let symbol = self
            .peek()
            .ok_or_else(|| self.error("expected an operator, found end of input"))?;
        let op = Operator::from_symbol(symbol as char)
            .ok_or_else(|| self.error(format!("unknown operator '{}'", symbol as char)))?;
        self.position += 1;
        Ok(op)
    }

    fn leaf(&mut self) -> Result<Tree> {
        let start = self.position;
        if self.input.get(self.position) == Some(&b'-') {
            self.position += 1;
        }
        if !self
            .input
            .get(self.position)
            .is_some_and(|byte| byte.is_ascii_digit())
        {
            return Err(self.error("expected a digit"));
        }
        while self
            .input
            .get(self.position)
            .is_some_and(|byte| byte.is_ascii_digit())
        {
            self.position += 1;
        }
        // Only an optional sign and ASCII digits were consumed.
        let digits = std::str::from_utf8(&self.input[start..self.position])
            .map_err(|_| self.error("invalid integer"))?;
        digits
            .parse::<i64>()
            .map(Tree::Leaf)
            .map_err(|e| self.error(format!("invalid integer '{}': {}", digits, e)))
    }

    fn finish(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(byte) => Err(self.error(format!("trailing input starting at '{}'", byte as char))),
        }
    }
}

impl FromStr for Tree {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = Parser::new(s);
        let tree = parser.tree()?;
        parser.finish()?;
        Ok(tree)
    }
}

impl FromStr for Expression {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = Parser::new(s);
        let expression = parser.expression()?;
        parser.finish()?;
        Ok(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaf() {
        assert_eq!("7".parse::<Tree>(), Ok(Tree::Leaf(7)));
        assert_eq!("  10 ".parse::<Tree>(), Ok(Tree::Leaf(10)));
    }

    #[test]
    fn test_parse_nested() {
        let tree: Tree = "((3 + 4) * 2)".parse().unwrap();
        assert_eq!(tree.to_string(), "((3 + 4) * 2)");
        assert_eq!(tree.evaluate(), Ok(14.0));
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_parse_tolerates_compact_form() {
        let spaced: Tree = "(1 - (8 / 2))".parse().unwrap();
        let compact: Tree = "(1-(8/2))".parse().unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_parse_expression_requires_internal_node() {
        assert!("5".parse::<Expression>().is_err());
        let expression: Expression = "(5 / 0)".parse().unwrap();
        assert_eq!(expression.op(), Operator::Div);
    }

    #[test]
    fn test_parse_errors_report_position() {
        match "(1 % 2)".parse::<Tree>() {
            Err(GeneticError::Parse { position, .. }) => assert_eq!(position, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!("(1 + 2".parse::<Tree>().is_err());
        assert!("(1 + 2))".parse::<Tree>().is_err());
        assert!("".parse::<Tree>().is_err());
        assert!("-".parse::<Tree>().is_err());
        assert!("(1 + - 3)".parse::<Tree>().is_err());
    }

    #[test]
    fn test_negative_leaves_parse_back() {
        assert_eq!("-3".parse::<Tree>(), Ok(Tree::Leaf(-3)));
        assert_eq!(Tree::Leaf(-3).to_string().parse::<Tree>(), Ok(Tree::Leaf(-3)));

        let product = Expression::new(Operator::Mul, Tree::Leaf(4), Tree::Leaf(-2));
        let parsed: Expression = product.to_string().parse().unwrap();
        assert_eq!(parsed, product);
        assert_eq!(parsed.evaluate(), Ok(-8.0));
    }

    #[test]
    fn test_minus_after_operand_is_subtraction() {
        let compact: Tree = "(1--2)".parse().unwrap();
        let spaced: Tree = "(1 - -2)".parse().unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact.evaluate(), Ok(3.0));
    }
}
