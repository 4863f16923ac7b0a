//! Ask Agent Client Library
//!
//! Wire types, HTTP transport and the Ask-Agent handler shared by the
//! desktop console and the `check_agent` diagnostic binary.

pub mod api_client;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod types;

pub use api_client::{AgentClient, AgentTransport};
pub use config::Config;
pub use error::ClientError;
pub use handler::{ask_agent, begin_ask, finish_ask, render_outcome, AgentView, Rendered};
pub use types::{AgentRequest, AgentResponse, Answer};
