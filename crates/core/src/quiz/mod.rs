//! Plan recommendation quiz
//!
//! Three fixed questions (team size, primary goal, support importance) feed an
//! additive scoring table that picks one of the four canonical tiers.

pub mod questions;
mod scoring;
mod session;

pub use questions::{Question, QUESTIONS, QUESTION_COUNT};
pub use scoring::{recommend, score_answers, ScoreTable, DEFAULT_TIER};
pub use session::{QuizSession, QuizStep};
