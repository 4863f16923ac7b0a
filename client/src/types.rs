//! Agent API wire types
//!
//! The response contract belongs to the backend and is not validated here.
//! Fields are read optimistically: anything that is not the expected shape
//! simply counts as absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the ask endpoint
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    /// The question text, sent verbatim
    pub message: String,
}

impl AgentRequest {
    /// Build a request for the given question
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            message: question.into(),
        }
    }
}

/// Top-level response from the ask endpoint
///
/// Deserializes from any JSON value; only a non-JSON body fails.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Value")]
pub struct AgentResponse {
    /// Error reported by the backend, if any
    pub error: Option<Value>,
    /// Answer payload, if any
    pub answer: Option<Value>,
}

impl From<Value> for AgentResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                error: fields.remove("error"),
                answer: fields.remove("answer"),
            },
            _ => Self::default(),
        }
    }
}

impl AgentResponse {
    /// The error text, if the error field is truthy
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().and_then(truthy_text)
    }

    /// The answer, if one is present and not null
    pub fn answer(&self) -> Option<Answer> {
        match &self.answer {
            None | Some(Value::Null) => None,
            Some(value) => Some(Answer::from_value(value)),
        }
    }
}

/// Answer payload: a human-readable explanation plus structured data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answer {
    /// Explanation, if present
    pub explanation: Option<Value>,
    /// Structured data, if present (an explicit null is kept)
    pub data: Option<Value>,
}

impl Answer {
    /// Read an answer from a JSON value; non-objects have no fields
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self {
                explanation: fields.get("explanation").cloned(),
                data: fields.get("data").cloned(),
            },
            _ => Self::default(),
        }
    }

    /// The explanation text, if the explanation field is truthy
    pub fn explanation_text(&self) -> Option<String> {
        self.explanation.as_ref().and_then(truthy_text)
    }

    /// The data pretty-printed with 2-space indentation
    pub fn data_text(&self) -> Option<String> {
        self.data.as_ref().map(|data| {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
        })
    }
}

/// Whether a JSON value is truthy in the sense of a browser script
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text of a truthy value; strings are shown without quotes
fn truthy_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
