// src/message.rs
use serde::{Deserialize, Serialize};

/// Inbound body for `POST /api/chat`. `message` is kept as a raw JSON value
/// so the handler can reject non-string payloads with the exact 400 body
/// instead of a generic deserialization error.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
