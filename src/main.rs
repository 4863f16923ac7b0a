// Ask Agent Console - Main Entry Point
// Native Rust GUI for asking the supply risk agent questions

mod state;
mod ui;

use ask_agent_client::{begin_ask, finish_ask, AgentClient, AgentResponse, AgentTransport, ClientError, Config};
use eframe::egui;
use state::AppState;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use ui::{render_app_layout, ActivityLog};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    Config::load_dotenv();
    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let app = AskAgentApp::new(config)?;

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Ask Agent")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 450.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native("Ask Agent", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("GUI terminated with error: {}", e))
}

/// A resolved request, sent back from the runtime to the UI thread
struct Completion {
    /// Sequence number assigned at submission
    request_id: u64,
    /// Result of the request
    outcome: Result<AgentResponse, ClientError>,
    /// Time between submission and resolution
    elapsed: Duration,
}

/// Main application struct
/// Owns UI state, the background runtime and the agent client
struct AskAgentApp {
    /// Question input, output areas and UI preferences
    state: AppState,
    /// Request event log
    activity: ActivityLog,
    /// Runtime that carries network requests off the UI thread
    runtime: tokio::runtime::Runtime,
    /// Transport used for every request
    transport: Arc<dyn AgentTransport>,
    /// Sender cloned into each request task
    completions_tx: mpsc::Sender<Completion>,
    /// Resolved requests waiting to be rendered
    completions_rx: mpsc::Receiver<Completion>,
    /// Next request sequence number
    next_request_id: u64,
}

impl AskAgentApp {
    /// Create a new application talking to the configured backend
    fn new(config: Config) -> anyhow::Result<Self> {
        let endpoint = config.agent_url();
        let client = AgentClient::new(config)?;
        let mut app = Self::with_transport(Arc::new(client))?;
        app.activity.add_line(format!("Agent endpoint: {}", endpoint));
        Ok(app)
    }

    /// Create a new application with an arbitrary transport
    fn with_transport(transport: Arc<dyn AgentTransport>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("agent-request")
            .enable_all()
            .build()?;
        let (completions_tx, completions_rx) = mpsc::channel();

        Ok(Self {
            state: AppState::new(),
            activity: ActivityLog::default(),
            runtime,
            transport,
            completions_tx,
            completions_rx,
            next_request_id: 1,
        })
    }

    /// Handle an Ask action: validate on the UI thread, then send in the background
    ///
    /// Earlier requests are not cancelled; whichever resolves last is rendered last.
    fn submit(&mut self, ctx: &egui::Context) {
        let Some(question) = begin_ask(&mut self.state) else {
            self.activity.add_line("Rejected empty question".to_string());
            return;
        };

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.state.request_started();
        self.activity.add_line(format!("#{} sent: {}", request_id, question));
        tracing::info!(request_id, question_len = question.len(), "Submitting question");

        let transport = Arc::clone(&self.transport);
        let tx = self.completions_tx.clone();
        let ctx = ctx.clone();
        let started = Instant::now();

        self.runtime.spawn(async move {
            let outcome = transport.ask(&question).await;
            let completion = Completion {
                request_id,
                outcome,
                elapsed: started.elapsed(),
            };
            // The receiver only goes away when the app is shutting down
            if tx.send(completion).is_err() {
                tracing::debug!(request_id, "Dropping completion after shutdown");
            }
            ctx.request_repaint();
        });
    }

    /// Render every request that has resolved since the last frame
    fn apply_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            let Completion {
                request_id,
                outcome,
                elapsed,
            } = completion;

            let summary = match &outcome {
                Ok(response) if response.error_message().is_some() => "agent reported an error",
                Ok(_) => "answered",
                Err(_) => "failed",
            };
            tracing::info!(
                request_id,
                duration_ms = elapsed.as_millis() as u64,
                summary,
                "Request resolved"
            );
            self.activity.add_line(format!(
                "#{} {} in {} ms",
                request_id,
                summary,
                elapsed.as_millis()
            ));

            self.state.request_finished();
            finish_ask(&mut self.state, outcome);
        }
    }
}

impl eframe::App for AskAgentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_completions();

        let action = render_app_layout(ctx, &mut self.state, &mut self.activity);
        if action.ask {
            self.submit(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Transport that answers every question with the same body
    struct StaticTransport(&'static str);

    #[async_trait]
    impl AgentTransport for StaticTransport {
        async fn ask(&self, _question: &str) -> Result<AgentResponse, ClientError> {
            Ok(serde_json::from_str(self.0).unwrap())
        }
    }

    fn wait_for_completion(app: &mut AskAgentApp) {
        for _ in 0..200 {
            if !app.state.is_waiting() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
            app.apply_completions();
        }
        panic!("request did not complete");
    }

    #[test]
    fn test_app_creation() {
        let app = AskAgentApp::new(Config::default()).unwrap();
        assert!(!app.state.is_waiting());
        assert_eq!(app.activity.lines().len(), 1);
    }

    #[test]
    fn test_app_rejects_invalid_config() {
        let config = Config {
            endpoint: "no-slash".to_string(),
            ..Config::default()
        };
        assert!(AskAgentApp::new(config).is_err());
    }

    #[test]
    fn test_submit_empty_question() {
        let mut app = AskAgentApp::with_transport(Arc::new(StaticTransport("{}"))).unwrap();
        let ctx = egui::Context::default();

        app.submit(&ctx);

        assert!(!app.state.is_waiting());
        assert_eq!(app.state.alert.as_deref(), Some("Please enter a question"));
        assert_eq!(app.next_request_id, 1);
    }

    #[test]
    fn test_submit_renders_answer() {
        let mut app = AskAgentApp::with_transport(Arc::new(StaticTransport(
            r#"{"answer": {"explanation": "ok", "data": {"x": 1}}}"#,
        )))
        .unwrap();
        let ctx = egui::Context::default();

        app.state.question = "Which suppliers are at risk?".to_string();
        app.submit(&ctx);
        assert!(app.state.is_waiting());
        assert_eq!(app.state.explanation, "Thinking...");

        wait_for_completion(&mut app);
        assert_eq!(app.state.explanation, "ok");
        assert_eq!(app.state.data, "{\n  \"x\": 1\n}");
        assert!(app.activity.lines().iter().any(|l| l.starts_with("#1 answered")));
    }

    #[test]
    fn test_submit_renders_agent_error() {
        let mut app =
            AskAgentApp::with_transport(Arc::new(StaticTransport(r#"{"error": "bad"}"#))).unwrap();
        let ctx = egui::Context::default();

        app.state.question = "q".to_string();
        app.submit(&ctx);
        wait_for_completion(&mut app);

        assert_eq!(app.state.explanation, "bad");
        assert!(app.state.data.is_empty());
    }
}
