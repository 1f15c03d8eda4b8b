// Problem generation, answer checking and drill session state. The terminal
// front end in main.rs is built on top of these.
pub mod app_dirs;
pub mod config;
pub mod difficulty;
pub mod evaluator;
pub mod generator;
pub mod logging;
pub mod problem;
pub mod runtime;
pub mod session;
pub mod timer;

pub use difficulty::DifficultyLevel;
pub use evaluator::{evaluate, EvaluationResult, Verdict};
pub use generator::ProblemGenerator;
pub use problem::{Operation, Problem};
pub use session::{InputStatus, Session, SessionConfig};
