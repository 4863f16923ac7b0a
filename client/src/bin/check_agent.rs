//! Diagnostic binary for verifying that the agent backend is reachable
//! and answers questions. This is a utility binary, not part of the console.
//!
//! Usage: check_agent [question]

use ask_agent_client::{ask_agent, AgentClient, AgentView, Config};
use std::env;

const DEFAULT_QUESTION: &str = "Which suppliers are at highest risk?";

/// View that prints the output areas to the terminal
struct ConsoleView {
    question: String,
    explanation: String,
    data: String,
}

impl AgentView for ConsoleView {
    fn question(&self) -> String {
        self.question.clone()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("   ⚠ {}", message);
    }

    fn set_explanation(&mut self, text: &str) {
        self.explanation = text.to_string();
    }

    fn set_data(&mut self, text: &str) {
        self.data = text.to_string();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Config::load_dotenv();
    let config = Config::from_env();
    let client = AgentClient::new(config)?;

    println!("Checking agent backend at {}\n", client.config().base_url);

    // Step 1: reachability
    println!("1. Pinging backend root...");
    match client.ping().await {
        Ok(banner) => println!("   ✓ {}", banner.trim()),
        Err(e) => {
            eprintln!("   ✗ {}", e);
            eprintln!("   Make sure the backend is running and AGENT_BASE_URL is correct");
            return Err(e.into());
        }
    }

    // Step 2: ask a question through the same handler the console uses
    let question = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUESTION.to_string());
    println!("\n2. Asking: '{}'", question);

    let mut view = ConsoleView {
        question,
        explanation: String::new(),
        data: String::new(),
    };
    ask_agent(&mut view, &client).await;

    println!("\n   Explanation:\n   {}", view.explanation);
    if !view.data.is_empty() {
        println!("\n   Data:\n{}", view.data);
    }

    println!("\n✓ Check completed!");
    Ok(())
}
