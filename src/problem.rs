use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The kind of problem being drilled
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    #[strum(to_string = "Addition")]
    Add,
    #[strum(to_string = "Subtraction")]
    Subtract,
    #[strum(to_string = "Multiplication")]
    Multiply,
    #[strum(to_string = "Division")]
    Divide,
    // rendered exactly like Divide, kept as its own tag
    #[strum(to_string = "Fractions")]
    Fraction,
    #[strum(to_string = "Percentages")]
    Percent,
    #[strum(to_string = "Earnings Growth")]
    EarningsGrowth,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0:?}")]
pub struct OperationParseError(pub String);

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Fraction,
        Operation::Percent,
        Operation::EarningsGrowth,
    ];

    /// Stable token used in config files and on the command line
    pub fn token(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Fraction => "fraction",
            Operation::Percent => "percent",
            Operation::EarningsGrowth => "earnings-growth",
        }
    }

    /// Infix symbol for the two-operand arithmetic forms
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Operation::Add => Some("+"),
            Operation::Subtract => Some("-"),
            Operation::Multiply => Some("*"),
            Operation::Divide | Operation::Fraction => Some("/"),
            Operation::Percent | Operation::EarningsGrowth => None,
        }
    }

    /// Resolve a token, falling back to `Add` for anything unrecognized
    pub fn from_token_or_default(token: &str) -> Self {
        match token.parse() {
            Ok(op) => op,
            Err(err) => {
                tracing::warn!(%err, "falling back to addition");
                Operation::Add
            }
        }
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|op| op == self).unwrap_or(0)
    }
}

impl FromStr for Operation {
    type Err = OperationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| {
                op.token() == needle
                    || op.symbol() == Some(needle.as_str()) && *op != Operation::Fraction
            })
            .or(match needle.as_str() {
                // tokens used by earlier front ends
                "frac" => Some(Operation::Fraction),
                "earnings_growth" => Some(Operation::EarningsGrowth),
                _ => None,
            })
            .ok_or_else(|| OperationParseError(s.to_string()))
    }
}

/// A generated problem: the operation, its operands and how it is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProblemFields")]
pub struct Problem {
    operation: Operation,
    operands: [u32; 2],
    display_text: String,
}

// Stored text is ignored on load and rendered again from the operands
#[derive(Deserialize)]
struct ProblemFields {
    operation: Operation,
    operands: [u32; 2],
}

impl From<ProblemFields> for Problem {
    fn from(fields: ProblemFields) -> Self {
        Problem::new(fields.operation, fields.operands)
    }
}

impl Problem {
    pub fn new(operation: Operation, operands: [u32; 2]) -> Self {
        Self {
            display_text: render(operation, operands),
            operation,
            operands,
        }
    }

    /// Recover a problem from its rendered text by taking the first two
    /// integer runs. Only meant for text produced by older front ends.
    pub fn from_display(operation: Operation, text: &str) -> Self {
        let mut numbers = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .filter_map(|run| run.parse::<u32>().ok());

        let first = numbers.next().unwrap_or(0);
        let second = numbers.next().unwrap_or(0);

        Self::new(operation, [first, second])
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operands(&self) -> [u32; 2] {
        self.operands
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text)
    }
}

fn render(operation: Operation, [a, b]: [u32; 2]) -> String {
    match operation {
        Operation::Percent => format!("{a}% of {b}?"),
        Operation::EarningsGrowth => format!("{a} to {b} EPS growth percentage"),
        other => format!("{a} {} {b}", other.symbol().unwrap_or("+")),
    }
}
