//! Answer-set parse errors.
//!
//! Scoring itself cannot fail; the only typed failures in this crate come from
//! turning external input into an [`AnswerSet`](crate::answers::AnswerSet).

use thiserror::Error;

/// Errors that can occur when deserializing an answer set.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The input was valid JSON but not an array.
    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),

    /// An array element was not a string.
    #[error("element {index} is {found}, expected a string")]
    NonStringElement { index: usize, found: &'static str },
}
