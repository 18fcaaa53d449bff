use std::rc::Rc;

use exprgen::{
    breeding::cross,
    evolution::{diversity, Challenge, TargetChallenge},
    generator::{Generator, LEAF_MAX, LEAF_MIN},
    rng::RandomNumberGenerator,
    Expression, GeneticError, Operator, Tree,
};

fn leaf(value: i64) -> Tree {
    Tree::Leaf(value)
}

fn node(op: Operator, left: Tree, right: Tree) -> Tree {
    Tree::node(Expression::new(op, left, right))
}

#[test]
fn test_arithmetic_over_all_leaf_pairs() {
    for a in LEAF_MIN..=LEAF_MAX {
        for b in LEAF_MIN..=LEAF_MAX {
            let (x, y) = (a as f64, b as f64);
            assert_eq!(node(Operator::Add, leaf(a), leaf(b)).evaluate(), Ok(x + y));
            assert_eq!(node(Operator::Sub, leaf(a), leaf(b)).evaluate(), Ok(x - y));
            assert_eq!(node(Operator::Mul, leaf(a), leaf(b)).evaluate(), Ok(x * y));

            let quotient = node(Operator::Div, leaf(a), leaf(b)).evaluate();
            if b == 0 {
                assert_eq!(quotient, Err(GeneticError::DivisionByZero));
            } else {
                assert_eq!(quotient, Ok(x / y));
            }
        }
    }
}

#[test]
fn test_fitness_bounds_on_random_trees() {
    let mut rng = RandomNumberGenerator::from_seed(2024);
    let generator = Generator::new(4);
    let challenge = TargetChallenge::new(42.0);

    for individual in generator.generate_population(300, &mut rng) {
        let score = challenge.score(&individual).unwrap();
        assert!(score > 0.0 && score <= 1.0);

        match individual.evaluate() {
            Ok(value) => {
                assert_eq!(individual.cached(), Some(value));
                assert_eq!(score == 1.0, value == 42.0);
            }
            Err(GeneticError::DivisionByZero) => assert_eq!(score, 1.0 / 1001.0),
            Err(e) => panic!("unexpected error {}", e),
        }
    }
}

#[test]
fn test_generated_trees_round_trip_through_display() {
    let mut rng = RandomNumberGenerator::from_seed(17);
    let generator = Generator::new(3);

    for depth in 0..=5 {
        let tree = generator.generate(depth, &mut rng);
        let parsed: Tree = tree.to_string().parse().unwrap();
        assert_eq!(parsed, tree);
        assert_eq!(parsed.depth(), depth);
    }
}

#[test]
fn test_diversity_after_scoring() {
    let challenge = TargetChallenge::new(0.0);
    let population: Vec<Rc<Expression>> = ["(1 + 1)", "(2 * 1)", "(3 - 1)", "(9 / 3)"]
        .iter()
        .map(|s| Rc::new(s.parse::<Expression>().unwrap()))
        .collect();

    for individual in &population {
        challenge.score(individual).unwrap();
    }

    // Three individuals evaluate to 2, one to 3.
    assert_eq!(diversity(&population), 3);
}

#[test]
fn test_crossover_offspring_follow_the_deeper_parent() {
    // Subtrees of mismatched parents combine, so offspring depth is not
    // bounded by either parent's generation depth.
    let shallow: Rc<Expression> = Rc::new("(1 + 2)".parse().unwrap());
    let deep: Rc<Expression> = Rc::new("(((1 + 1) + 1) * ((2 + 2) + 2))".parse().unwrap());
    let mut rng = RandomNumberGenerator::from_seed(6);

    let depths: Vec<usize> = (0..100)
        .map(|_| cross(&shallow, &deep, 1.0, &mut rng).depth())
        .collect();

    assert!(depths.contains(&1));
    assert!(depths.contains(&3));
}
