//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::Transcript;
use crate::openai::Model;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    // Falls back to the configured system message
    pub system_prompt: Option<String>,
    // Falls back to the configured default model
    pub model: Option<Model>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

impl ChatResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Transcript,
}

#[derive(Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<Model>,
    pub default: Model,
}
