//! quizscore-core — Answer-set parsing and positional scoring.
//!
//! This crate defines the answer-set model, the comparison policies, and the
//! scorer that the `quizscore` binary is built on.

pub mod answers;
pub mod error;
pub mod report;
pub mod scorer;

pub use answers::{parse_answer_set, AnswerSet};
pub use scorer::{normalize, score, Comparator, ExactMatch, Scorer};
