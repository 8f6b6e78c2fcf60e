// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/", get(|| async { "FitMind AI backend is running" }))
        .layer(TraceLayer::new_for_http())
}
