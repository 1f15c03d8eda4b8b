use assert_matches::assert_matches;
use mathdrill::{
    evaluate,
    evaluator::{correct_answer, EvalError},
    DifficultyLevel, InputStatus, Operation, Problem, ProblemGenerator, Session, SessionConfig,
    Verdict,
};

// End-to-end checks of the generator, evaluator and session working together

fn level(n: u8) -> DifficultyLevel {
    DifficultyLevel::new(n).unwrap()
}

fn seeded(operation: Operation, seed: u64) -> Session {
    Session::with_generator(
        operation,
        level(4),
        ProblemGenerator::seeded(seed),
        SessionConfig::default(),
    )
}

/// Answer computed independently of the evaluator: the exact value as an
/// integer fraction, rounded half away from zero to whole cents
fn expected(problem: &Problem) -> f64 {
    let [a, b] = problem.operands().map(i64::from);
    let (num, den) = match problem.operation() {
        Operation::Add => (a + b, 1),
        Operation::Subtract => (a - b, 1),
        Operation::Multiply => (a * b, 1),
        Operation::Divide | Operation::Fraction => (a, b),
        Operation::Percent => (a * b, 100),
        Operation::EarningsGrowth => ((b - a) * 100, a),
    };
    let cents = (2 * num.abs() * 100 + den) / (2 * den);
    num.signum() as f64 * cents as f64 / 100.0
}

#[test]
fn typed_correct_answers_round_trip_for_every_operation() {
    let mut generator = ProblemGenerator::seeded(2024);
    for op in Operation::ALL {
        for n in 1..=10 {
            for _ in 0..20 {
                let problem = generator.generate(op, level(n));
                let answer = expected(&problem);
                let result = evaluate(&problem, &answer.to_string());
                assert_eq!(
                    result.verdict,
                    Verdict::Correct,
                    "{problem} answered with {answer}"
                );
                assert_eq!(result.correct_answer, Some(answer));
            }
        }
    }
}

#[test]
fn evaluator_answer_matches_independent_formula() {
    let mut generator = ProblemGenerator::seeded(77);
    for op in Operation::ALL {
        for _ in 0..100 {
            let problem = generator.generate(op, level(10));
            assert_eq!(correct_answer(&problem), Ok(expected(&problem)));
        }
    }
}

#[test]
fn every_small_quotient_rounds_like_decimal_arithmetic() {
    for op in [Operation::Divide, Operation::Percent] {
        for a in 1..=100 {
            for b in 1..=100 {
                let problem = Problem::new(op, [a, b]);
                assert_eq!(correct_answer(&problem), Ok(expected(&problem)), "{problem}");
            }
        }
    }
    for a in 1..=1000 {
        for growth in 1..=50 {
            let problem = Problem::new(Operation::EarningsGrowth, [a, a + growth]);
            assert_eq!(correct_answer(&problem), Ok(expected(&problem)), "{problem}");
        }
    }
}

#[test]
fn scenario_add() {
    let problem = Problem::new(Operation::Add, [7, 3]);
    assert_eq!(problem.display_text(), "7 + 3");
    let result = evaluate(&problem, "10");
    assert_eq!(result.verdict, Verdict::Correct);
    assert_eq!(result.correct_answer, Some(10.0));
}

#[test]
fn scenario_percent() {
    let problem = Problem::new(Operation::Percent, [20, 50]);
    assert_eq!(problem.display_text(), "20% of 50?");
    assert_eq!(evaluate(&problem, "10").verdict, Verdict::Correct);
}

#[test]
fn scenario_eps_growth() {
    let problem = Problem::new(Operation::EarningsGrowth, [40, 55]);
    assert_eq!(problem.display_text(), "40 to 55 EPS growth percentage");
    assert_eq!(evaluate(&problem, "37.5").verdict, Verdict::Correct);
}

#[test]
fn empty_submit_never_panics() {
    for op in Operation::ALL {
        let mut session = seeded(op, 1);
        for _ in 0..10 {
            let result = session.submit("");
            assert_eq!(result.verdict, Verdict::InvalidInput);
            assert_eq!(session.input_status(), InputStatus::Error);
        }
    }
}

#[test]
fn garbage_submit_is_error_and_advances() {
    for op in Operation::ALL {
        let mut session = seeded(op, 8);
        let before = session.current().clone();

        let result = session.submit("abc");

        assert_matches!(
            result.verdict,
            Verdict::ComputationError(EvalError::InvalidNumber(_))
        );
        assert_eq!(session.previous(), Some(&before));
        assert_eq!(session.current().operation(), op);
    }
}

#[test]
fn back_twice_only_restores_once() {
    let mut session = seeded(Operation::Divide, 3);
    session.submit("1");
    let second = session.current().clone();
    session.submit("1");

    assert!(session.back());
    assert_eq!(session.current(), &second);
    assert!(!session.back());
    assert_eq!(session.current(), &second);
    assert!(session.previous().is_none());
}

#[test]
fn drill_through_a_run_of_problems() {
    let mut session = seeded(Operation::EarningsGrowth, 99);
    let mut correct = 0;

    for round in 0..30 {
        let answer = expected(session.current());
        // every third answer is deliberately off by one
        let typed = if round % 3 == 0 { answer + 1.0 } else { answer };
        let result = session.submit(&typed.to_string());
        if result.is_correct() {
            correct += 1;
            assert_eq!(session.input_status(), InputStatus::Correct);
        } else {
            assert_eq!(result.verdict, Verdict::Incorrect);
            assert_eq!(session.input_status(), InputStatus::Incorrect);
        }
    }

    assert_eq!(correct, 20);
}
