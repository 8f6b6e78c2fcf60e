// src/state.rs
use std::sync::Arc;

use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

/// The completion client is injected here rather than held as a process-wide
/// singleton, so tests can swap in a scripted double.
pub struct AppState {
    pub completions: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(completions: Arc<dyn CompletionClient>) -> Self {
        Self { completions }
    }
}
