mod agent;
mod config;
mod dispatcher;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent::executor::AgentExecutor;
use crate::agent::llm_client::LlmClient;
use crate::agent::tool::{ResumeLookupTool, Tool};
use crate::config::Config;
use crate::models::resume::load_resume;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (errors on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Agent API v{}", env!("CARGO_PKG_VERSION"));

    // Load the resume document once, before any request is served.
    // A missing or malformed file aborts startup rather than degrading per-request.
    let resume = Arc::new(
        load_resume(&config.resume_path)
            .with_context(|| format!("Failed to load resume from {:?}", config.resume_path))?,
    );
    info!("Resume document loaded from {:?}", config.resume_path);

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", agent::llm_client::MODEL);

    // Build the agent executor with its single tool
    let lookup: Arc<dyn Tool> = Arc::new(ResumeLookupTool::new(resume));
    let executor = AgentExecutor::new(llm, vec![lookup]);

    // Build app state
    let state = AppState {
        agent: Arc::new(executor),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
