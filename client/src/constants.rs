//! Client constants
//!
//! Literal texts shown in the output areas and default endpoint settings.

/// Placeholder written to the explanation area while a request is in flight
pub const THINKING_PLACEHOLDER: &str = "Thinking...";

/// Fallback shown when the answer carries no usable explanation
pub const NO_EXPLANATION: &str = "No explanation";

/// Alert raised when the question input is empty
pub const EMPTY_QUESTION_ALERT: &str = "Please enter a question";

/// Prefix of the message rendered when a request fails outright
pub const REQUEST_FAILED_PREFIX: &str = "Request failed";

/// Default origin of the agent backend
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default path of the ask endpoint
pub const DEFAULT_AGENT_ENDPOINT: &str = "/api/agent";

/// Maximum number of response body bytes kept in error messages
pub const MAX_ERROR_BODY_LEN: usize = 512;
