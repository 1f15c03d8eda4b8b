use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    difficulty::DifficultyLevel,
    problem::{Operation, Problem},
};

/// Range of the base EPS figure before it is scaled by difficulty
const EPS_BASE_MAX: u32 = 100;
/// Largest step from previous to current EPS
const EPS_GROWTH_MAX: u32 = 50;

/// Produces random problems for an operation and difficulty
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
}

impl ProblemGenerator<StdRng> {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence of problems
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ProblemGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, operation: Operation, difficulty: DifficultyLevel) -> Problem {
        let max = difficulty.max_operand();

        let operands = match operation {
            Operation::EarningsGrowth => {
                let previous = self.rng.gen_range(1..=EPS_BASE_MAX) * u32::from(difficulty.get());
                let current = previous + self.rng.gen_range(1..=EPS_GROWTH_MAX);
                [previous, current]
            }
            Operation::Divide | Operation::Fraction => {
                let num1 = self.rng.gen_range(1..=max);
                let num2 = self.rng.gen_range(1..=max).max(1);
                [num1, num2]
            }
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Percent => [self.rng.gen_range(1..=max), self.rng.gen_range(1..=max)],
        };

        let problem = Problem::new(operation, operands);
        tracing::debug!(
            operation = operation.token(),
            difficulty = difficulty.get(),
            problem = problem.display_text(),
            "generated problem"
        );
        problem
    }
}
