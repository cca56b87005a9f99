use std::sync::Arc;

use crate::agent::executor::AgentRuntime;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The agent-execution abstraction. Production wires in `AgentExecutor`;
    /// endpoint tests substitute a mock.
    pub agent: Arc<dyn AgentRuntime>,
    pub config: Config,
}
