//! Ask-Agent handler
//!
//! Reads the question from the view, validates it, shows a placeholder,
//! sends one request and renders the outcome into the explanation and data
//! areas. The view is passed in explicitly so the handler never looks up
//! UI elements on its own.
//!
//! The handler is split in two halves so that a UI thread can run
//! [`begin_ask`], hand the request to a background runtime, and later
//! apply the result with [`finish_ask`]. [`ask_agent`] runs both halves
//! around a single awaited request.

use crate::api_client::AgentTransport;
use crate::constants::{
    EMPTY_QUESTION_ALERT, NO_EXPLANATION, REQUEST_FAILED_PREFIX, THINKING_PLACEHOLDER,
};
use crate::error::ClientError;
use crate::types::AgentResponse;

/// Handles to the three UI elements the handler works with
pub trait AgentView {
    /// Current contents of the question input
    fn question(&self) -> String;

    /// Show a blocking notice to the user
    fn alert(&mut self, message: &str);

    /// Replace the text of the explanation area
    fn set_explanation(&mut self, text: &str);

    /// Replace the text of the data area
    fn set_data(&mut self, text: &str);
}

/// Texts to write into the output areas once a request has resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// New explanation text
    pub explanation: String,
    /// New data text; `None` leaves the data area untouched
    pub data: Option<String>,
}

/// Read and validate the question, then show the loading placeholder
///
/// Returns the question to send, or `None` if the input was empty. In the
/// empty case the user is alerted and nothing else changes.
pub fn begin_ask<V: AgentView + ?Sized>(view: &mut V) -> Option<String> {
    let question = view.question();

    if question.is_empty() {
        tracing::debug!("Rejected empty question");
        view.alert(EMPTY_QUESTION_ALERT);
        return None;
    }

    view.set_explanation(THINKING_PLACEHOLDER);
    view.set_data("");
    Some(question)
}

/// Work out what the output areas should show for a request outcome
pub fn render_outcome(outcome: Result<AgentResponse, ClientError>) -> Rendered {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return render_failure(&e),
    };

    if let Some(message) = response.error_message() {
        return Rendered {
            explanation: message,
            data: None,
        };
    }

    match response.answer() {
        Some(answer) => Rendered {
            explanation: answer
                .explanation_text()
                .unwrap_or_else(|| NO_EXPLANATION.to_string()),
            data: Some(answer.data_text().unwrap_or_default()),
        },
        None => render_failure(&ClientError::MissingAnswer),
    }
}

fn render_failure(error: &ClientError) -> Rendered {
    tracing::warn!(error = %error, "Agent request failed");
    Rendered {
        explanation: format!("{}: {}", REQUEST_FAILED_PREFIX, error),
        data: None,
    }
}

/// Apply a request outcome to the view
pub fn finish_ask<V: AgentView + ?Sized>(
    view: &mut V,
    outcome: Result<AgentResponse, ClientError>,
) {
    let rendered = render_outcome(outcome);
    view.set_explanation(&rendered.explanation);
    if let Some(data) = &rendered.data {
        view.set_data(data);
    }
}

/// Ask the agent the question currently in the view and render the answer
///
/// Sends at most one request. Failures of any kind end up as text in the
/// explanation area.
pub async fn ask_agent<V, T>(view: &mut V, transport: &T)
where
    V: AgentView + ?Sized,
    T: AgentTransport + ?Sized,
{
    let Some(question) = begin_ask(view) else {
        return;
    };

    let outcome = transport.ask(&question).await;
    finish_ask(view, outcome);
}
