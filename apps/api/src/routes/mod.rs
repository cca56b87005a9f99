pub mod chat;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // The chat UI page lives outside the core: a single static file.
    let chat_page = ServeFile::new(state.config.static_dir.join("chat.html"));

    Router::new()
        .route_service("/", chat_page)
        .route("/health", get(health::health_handler))
        .route("/chat", post(chat::handle_chat))
        .with_state(state)
}
