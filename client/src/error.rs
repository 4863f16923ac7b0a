//! Error types for the agent client
//!
//! Every failure the console can hit between reading the question and
//! rendering the answer is represented here, so the handler can turn it
//! into a user-visible message instead of leaving the placeholder stuck.

use thiserror::Error;

/// Errors that can occur while asking the agent
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read
    #[error("Failed to reach agent: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Failed to parse JSON response (HTTP {status}): {source} - Response body: {body}")]
    InvalidJson {
        /// HTTP status of the response
        status: u16,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
        /// Response body, truncated
        body: String,
    },

    /// The response carried neither an error nor an answer
    #[error("Agent response contains no answer")]
    MissingAnswer,

    /// The backend answered a probe with a non-success status
    #[error("Agent returned status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status of the response
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Catch-all for unexpected errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Truncate a response body for inclusion in an error message
pub(crate) fn truncate_body(body: &str, max_len: usize) -> String {
    if body.len() <= max_len {
        return body.to_string();
    }
    let mut end = max_len;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short() {
        assert_eq!(truncate_body("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_body_long() {
        assert_eq!(truncate_body("abcdef", 3), "abc...");
    }

    #[test]
    fn test_truncate_body_respects_char_boundary() {
        // "é" is two bytes; cutting at 1 must back off to 0
        assert_eq!(truncate_body("éa", 1), "...");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClientError::MissingAnswer.to_string(),
            "Agent response contains no answer"
        );
        assert_eq!(
            ClientError::Config("bad".to_string()).to_string(),
            "Invalid configuration: bad"
        );
    }
}
