// Application state management
// Owns the three UI elements the Ask-Agent handler works with

use ask_agent_client::AgentView;

/// Main application state
/// The question input, the explanation and data areas, and UI preferences
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Contents of the question input
    pub question: String,
    /// Text shown in the explanation area
    pub explanation: String,
    /// Text shown in the data area
    pub data: String,
    /// Pending alert message, shown until dismissed
    pub alert: Option<String>,
    /// Number of requests that have been sent but not yet resolved
    pub in_flight: usize,
    /// UI state preferences
    pub ui_state: UiState,
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether to show the activity log
    pub activity_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            activity_visible: true,
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss the pending alert, if any
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Whether any request is still waiting for a response
    pub fn is_waiting(&self) -> bool {
        self.in_flight > 0
    }

    /// Record that a request has been sent
    pub fn request_started(&mut self) {
        self.in_flight += 1;
    }

    /// Record that a request has resolved
    pub fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

impl AgentView for AppState {
    fn question(&self) -> String {
        self.question.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn set_explanation(&mut self, text: &str) {
        self.explanation = text.to_string();
    }

    fn set_data(&mut self, text: &str) {
        self.data = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_agent_client::{begin_ask, finish_ask, AgentResponse};

    fn response(body: &str) -> AgentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.question.is_empty());
        assert!(state.alert.is_none());
        assert!(!state.is_waiting());
        assert!(state.ui_state.activity_visible);
    }

    #[test]
    fn test_empty_question_raises_alert() {
        let mut state = AppState::new();
        state.explanation = "earlier answer".to_string();

        assert!(begin_ask(&mut state).is_none());
        assert_eq!(state.alert.as_deref(), Some("Please enter a question"));
        assert_eq!(state.explanation, "earlier answer");

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_ask_cycle_updates_output_areas() {
        let mut state = AppState::new();
        state.question = "Which suppliers are at risk?".to_string();
        state.data = "stale".to_string();

        let question = begin_ask(&mut state);
        assert_eq!(question.as_deref(), Some("Which suppliers are at risk?"));
        assert_eq!(state.explanation, "Thinking...");
        assert!(state.data.is_empty());

        finish_ask(
            &mut state,
            Ok(response(r#"{"answer": {"explanation": "ok", "data": {"x": 1}}}"#)),
        );
        assert_eq!(state.explanation, "ok");
        assert_eq!(state.data, "{\n  \"x\": 1\n}");
    }

    #[test]
    fn test_in_flight_counter() {
        let mut state = AppState::new();
        state.request_started();
        state.request_started();
        assert!(state.is_waiting());

        state.request_finished();
        state.request_finished();
        state.request_finished(); // Extra completions never underflow
        assert!(!state.is_waiting());
    }
}
