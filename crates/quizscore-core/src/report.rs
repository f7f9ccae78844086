//! Score report output.

use serde::Serialize;

/// A computed score alongside the number of questions it was scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// Number of matching answers.
    pub score: usize,
    /// Number of expected answers.
    pub total: usize,
}

impl ScoreReport {
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    /// Serialize as compact JSON, e.g. `{"score":2,"total":3}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
