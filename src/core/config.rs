use std::env;

use crate::chat::Memory;
use crate::core::AgentError;
use crate::openai::Model;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_hostname: String,
    // Absent keys are kept as `None` so the server can still render
    // the configuration error instead of refusing to start
    pub api_key: Option<String>,
    pub system_message: String,
    pub default_model: Model,
    pub memory: Memory,
}

impl AppConfig {
    /// Returns the API key or the error shown to the user when it
    /// isn't set. Nothing should call the completion endpoint unless
    /// this succeeds.
    pub fn api_key(&self) -> Result<&str, AgentError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AgentError::MissingConfig(API_KEY_VAR.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_hostname = env::var("FOUNDATION_AGENT_API_HOST")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());
        let api_key = env::var(API_KEY_VAR).ok();
        let system_message = env::var("FOUNDATION_AGENT_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| "You are a helpful assistant.".to_string());
        let default_model = match env::var("FOUNDATION_AGENT_MODEL") {
            Ok(name) => name.parse().unwrap_or_else(|_| {
                tracing::warn!("Unknown model {}, using {}", name, Model::default());
                Model::default()
            }),
            Err(_) => Model::default(),
        };

        Self {
            api_hostname,
            api_key,
            system_message,
            default_model,
            memory: Memory::default(),
        }
    }
}
