use rand::{rngs::StdRng, Rng};
use std::time::{Duration, Instant};

use crate::{
    difficulty::DifficultyLevel,
    evaluator::{evaluate, EvaluationResult, Verdict},
    generator::ProblemGenerator,
    problem::{Operation, Problem},
    timer::{ResetTimer, STATUS_RESET_DELAY},
};

pub const NO_PREVIOUS_MESSAGE: &str = "No previous equation to go back to.";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub reset_delay: Duration,
    /// Move on to a new problem even when the answer was blank
    pub advance_on_invalid: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reset_delay: STATUS_RESET_DELAY,
            advance_on_invalid: true,
        }
    }
}

/// Feedback state of the answer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStatus {
    #[default]
    Idle,
    Correct,
    Incorrect,
    Error,
}

impl InputStatus {
    pub fn is_terminal(&self) -> bool {
        *self != InputStatus::Idle
    }
}

impl From<&Verdict> for InputStatus {
    fn from(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Correct => InputStatus::Correct,
            Verdict::Incorrect => InputStatus::Incorrect,
            Verdict::InvalidInput | Verdict::ComputationError(_) => InputStatus::Error,
        }
    }
}

#[derive(Debug, Clone)]
struct SessionState {
    current: Problem,
    previous: Option<Problem>,
    input_status: InputStatus,
    operation: Operation,
    difficulty: DifficultyLevel,
    /// Latest feedback line for the user
    notice: Option<String>,
}

/// One drill: the current problem, one step of history and feedback status
#[derive(Debug)]
pub struct Session<R = StdRng> {
    config: SessionConfig,
    state: SessionState,
    generator: ProblemGenerator<R>,
    reset: ResetTimer,
}

impl Session<StdRng> {
    pub fn start(operation: Operation, difficulty: DifficultyLevel) -> Self {
        Self::with_generator(
            operation,
            difficulty,
            ProblemGenerator::new(),
            SessionConfig::default(),
        )
    }
}

impl<R: Rng> Session<R> {
    pub fn with_generator(
        operation: Operation,
        difficulty: DifficultyLevel,
        mut generator: ProblemGenerator<R>,
        config: SessionConfig,
    ) -> Self {
        let current = generator.generate(operation, difficulty);
        tracing::info!(
            operation = operation.token(),
            difficulty = difficulty.get(),
            "session started"
        );

        Self {
            config,
            state: SessionState {
                current,
                previous: None,
                input_status: InputStatus::Idle,
                operation,
                difficulty,
                notice: None,
            },
            generator,
            reset: ResetTimer::new(),
        }
    }

    pub fn current(&self) -> &Problem {
        &self.state.current
    }

    pub fn previous(&self) -> Option<&Problem> {
        self.state.previous.as_ref()
    }

    pub fn display_text(&self) -> &str {
        self.state.current.display_text()
    }

    pub fn input_status(&self) -> InputStatus {
        self.state.input_status
    }

    pub fn operation(&self) -> Operation {
        self.state.operation
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.state.difficulty
    }

    pub fn notice(&self) -> Option<&str> {
        self.state.notice.as_deref()
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.state.operation = operation;
        tracing::info!(operation = operation.token(), "operation changed");
        self.restart();
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyLevel) {
        self.state.difficulty = difficulty;
        tracing::info!(difficulty = difficulty.get(), "difficulty changed");
        self.restart();
    }

    fn restart(&mut self) {
        self.state.current = self.next_problem();
        self.state.previous = None;
        self.state.input_status = InputStatus::Idle;
        self.reset.cancel();
    }

    fn next_problem(&mut self) -> Problem {
        self.generator
            .generate(self.state.operation, self.state.difficulty)
    }

    pub fn submit(&mut self, raw_input: &str) -> EvaluationResult {
        self.submit_at(raw_input, Instant::now())
    }

    /// Check the answer for the current problem and move on to the next one
    pub fn submit_at(&mut self, raw_input: &str, now: Instant) -> EvaluationResult {
        let result = evaluate(&self.state.current, raw_input);

        match &result.verdict {
            Verdict::ComputationError(err) => {
                tracing::warn!(
                    problem = self.state.current.display_text(),
                    %err,
                    "could not evaluate answer"
                );
            }
            verdict => {
                tracing::debug!(
                    problem = self.state.current.display_text(),
                    ?verdict,
                    "answer checked"
                );
            }
        }

        let advance = result.verdict != Verdict::InvalidInput || self.config.advance_on_invalid;
        if advance {
            let next = self.next_problem();
            self.state.previous = Some(std::mem::replace(&mut self.state.current, next));
        }

        self.state.input_status = InputStatus::from(&result.verdict);
        self.state.notice = Some(result.feedback());
        self.reset.schedule(now, self.config.reset_delay);

        result
    }

    /// Step back one problem. Only a single level of history is kept.
    pub fn back(&mut self) -> bool {
        match self.state.previous.take() {
            Some(previous) => {
                self.state.current = previous;
                true
            }
            None => {
                self.state.notice = Some(NO_PREVIOUS_MESSAGE.to_string());
                false
            }
        }
    }

    /// The answer field was edited
    pub fn on_input_edited(&mut self) {
        if self.state.input_status.is_terminal() {
            self.state.input_status = InputStatus::Idle;
            self.reset.cancel();
        }
    }

    /// Drive the status reset; returns true when it fired
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset.poll(now) {
            self.state.input_status = InputStatus::Idle;
            true
        } else {
            false
        }
    }
}
