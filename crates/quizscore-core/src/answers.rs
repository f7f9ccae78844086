//! Answer-set model and JSON intake.
//!
//! An answer set is an ordered list of answers, one per question. Position is
//! the only identity, so the type exposes no way to reorder or edit entries
//! once it has been built.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// One party's answers to a quiz, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<String>);

impl AnswerSet {
    /// Parse a JSON array of strings, e.g. `["A","B","C"]`.
    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(input).map_err(ParseError::InvalidJson)?;
        let items = match value {
            Value::Array(items) => items,
            other => return Err(ParseError::NotAnArray(json_kind(&other))),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s),
                other => Err(ParseError::NonStringElement {
                    index,
                    found: json_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Parse an answer set, falling back to an empty set on malformed input.
///
/// Parse failures are logged at `warn` and never returned.
pub fn parse_answer_set(input: &str) -> AnswerSet {
    match AnswerSet::from_json(input) {
        Ok(set) => {
            tracing::debug!("parsed {} answers", set.len());
            set
        }
        Err(e) => {
            tracing::warn!("error parsing answer set, treating as empty: {e}");
            AnswerSet::default()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
