use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// Persona and answer-length guidance sent with every completion request.
/// Fixed at compile time; not user-configurable.
pub const SYSTEM_PROMPT: &str = "\
You are FitMind AI, a fitness-focused chatbot.
- Help with workouts, training plans, reps/sets, and exercise technique.
- Give nutrition and diet guidance for different body goals.
- Provide motivation, mindset tips, and habit-building advice.
- Keep answers under 200 words, clear and beginner-friendly.";

pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

/// The whole relay: validate the body, make one completion call, map the
/// result. An unparseable body, a missing, empty, or non-string `message`
/// all get the same 400 before anything goes upstream.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload
        .ok()
        .and_then(|Json(body)| body.message)
        .and_then(|value| match value {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .ok_or(AppError::InvalidInput)?;

    let completion = state.completions.complete(SYSTEM_PROMPT, &message).await?;

    // An upstream answer with no usable content is not a fault; the client
    // gets a canned apology instead.
    let reply = completion
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| FALLBACK_REPLY.to_string(), str::to_string);

    Ok(Json(ChatResponse { reply }))
}
