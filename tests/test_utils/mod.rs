//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use serde_json::json;

use foundation_agent::api::AppState;
use foundation_agent::api::app;
use foundation_agent::chat::Memory;
use foundation_agent::core::AppConfig;
use foundation_agent::openai::Model;

pub const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// Config pointing the completion client at `api_hostname`,
/// usually a `mockito` server.
pub fn test_config(api_hostname: &str, memory: Memory) -> AppConfig {
    AppConfig {
        api_hostname: api_hostname.to_string(),
        api_key: Some(String::from("test-api-key")),
        system_message: String::from(SYSTEM_MESSAGE),
        default_model: Model::Llama33Versatile,
        memory,
    }
}

/// Creates a test application router from `config` with empty
/// sessions.
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// A successful chat completion response with `content` as the
/// assistant's message.
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
