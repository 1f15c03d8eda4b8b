use thiserror::Error;

use crate::problem::{Operation, Problem};

pub const CORRECT_MESSAGE: &str = "Correct!";
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number.";
pub const COMPUTATION_ERROR_MESSAGE: &str = "Error evaluating the equation.";

/// Why an answer could not be checked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("could not read {0:?} as a number")]
    InvalidNumber(String),

    #[error("division by zero in {0:?}")]
    DivisionByZero(String),

    #[error("result of {0:?} is not a finite number")]
    NonFinite(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// Blank answer; nothing was evaluated
    InvalidInput,
    ComputationError(EvalError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub verdict: Verdict,
    pub correct_answer: Option<f64>,
    pub submitted_value: Option<f64>,
}

impl EvaluationResult {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    /// Message shown to the user for this result
    pub fn feedback(&self) -> String {
        match (&self.verdict, self.correct_answer, self.submitted_value) {
            (Verdict::Correct, _, _) => CORRECT_MESSAGE.to_string(),
            (Verdict::Incorrect, Some(correct), Some(submitted)) => format!(
                "Incorrect. The correct answer is {correct}. You entered {submitted}."
            ),
            (Verdict::InvalidInput, _, _) => INVALID_INPUT_MESSAGE.to_string(),
            _ => COMPUTATION_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Round half away from zero to two decimal places.
///
/// Works on the shortest decimal form of `value` rather than on its binary
/// approximation, so `1.025` (which is stored as `1.02499...`) becomes `1.03`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let text = value.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let digits = fraction.as_bytes();
    if digits.len() <= 2 {
        return value;
    }

    let hundredths = u64::from(digits[0] - b'0') * 10 + u64::from(digits[1] - b'0');
    let round_up = digits[2] >= b'5';
    let cents = whole
        .parse::<u64>()
        .ok()
        .and_then(|whole| whole.checked_mul(100))
        .and_then(|cents| cents.checked_add(hundredths + u64::from(round_up)));

    match cents {
        // beyond 2^53 cents stop being exact; the binary form is as good as any
        Some(cents) if cents < 1 << 53 => (cents as f64 / 100.0).copysign(value),
        _ => (value * 100.0).round() / 100.0,
    }
}

/// The exact answer for a problem, computed from its operands
pub fn exact_answer(problem: &Problem) -> Result<f64, EvalError> {
    let [a, b] = problem.operands().map(f64::from);
    let divide = |num: f64, den: f64| {
        if den == 0.0 {
            Err(EvalError::DivisionByZero(problem.display_text().to_string()))
        } else {
            Ok(num / den)
        }
    };

    let value = match problem.operation() {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide | Operation::Fraction => divide(a, b)?,
        // products first, one division last: the result is the closest
        // double to the exact quotient
        Operation::Percent => a * b / 100.0,
        Operation::EarningsGrowth => divide((b - a) * 100.0, a)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(problem.display_text().to_string()))
    }
}

/// The answer a user is expected to type: exact answer rounded to cents
pub fn correct_answer(problem: &Problem) -> Result<f64, EvalError> {
    exact_answer(problem).map(round2)
}

fn parse_answer(raw: &str) -> Result<f64, EvalError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EvalError::InvalidNumber(raw.to_string())),
    }
}

/// Check a raw answer against a problem.
///
/// Comparison is exact float equality against the rounded answer, so
/// `0.33` matches `1 / 3` but `0.333` does not.
pub fn evaluate(problem: &Problem, raw_input: &str) -> EvaluationResult {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return EvaluationResult {
            verdict: Verdict::InvalidInput,
            correct_answer: None,
            submitted_value: None,
        };
    }

    let correct = match correct_answer(problem) {
        Ok(value) => value,
        Err(err) => {
            return EvaluationResult {
                verdict: Verdict::ComputationError(err),
                correct_answer: None,
                submitted_value: parse_answer(trimmed).ok(),
            }
        }
    };

    match parse_answer(trimmed) {
        Ok(submitted) => EvaluationResult {
            verdict: if submitted == correct {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            },
            correct_answer: Some(correct),
            submitted_value: Some(submitted),
        },
        Err(err) => EvaluationResult {
            verdict: Verdict::ComputationError(err),
            correct_answer: Some(correct),
            submitted_value: None,
        },
    }
}
