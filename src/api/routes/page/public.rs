//! Public types for the chat page
use serde::{Deserialize, Serialize};

use crate::chat::Memory;
use crate::core::AppConfig;
use crate::openai::Model;

pub const TITLE: &str = "Foundation Agent (Stage 0)";

/// Fields submitted by the question form.
#[derive(Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub question: String,
    pub system_prompt: Option<String>,
    pub model: Option<Model>,
}

#[derive(Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub selected: bool,
}

/// Everything needed to render the page. Every field is always
/// serialized, even when empty, since templates render in strict
/// mode.
#[derive(Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub description: &'static str,
    pub config_error: Option<String>,
    pub system_prompt: String,
    pub models: Vec<ModelOption>,
    pub question: String,
    pub response: Option<String>,
    pub error: Option<String>,
}

impl PageView {
    pub fn new(config: &AppConfig, system_prompt: Option<String>, model: Option<Model>) -> Self {
        let selected = model.unwrap_or(config.default_model);
        let models = Model::ALL
            .into_iter()
            .map(|m| ModelOption {
                id: m.as_str(),
                selected: m == selected,
            })
            .collect();

        Self {
            title: TITLE,
            description: description(config.memory),
            config_error: config.api_key().err().map(|e| e.to_string()),
            system_prompt: system_prompt.unwrap_or_else(|| config.system_message.clone()),
            models,
            question: String::new(),
            response: None,
            error: None,
        }
    }
}

fn description(memory: Memory) -> &'static str {
    match memory {
        Memory::Enabled => {
            "This app sends your question to Groq and shows the response. \
             It also resends earlier questions and earlier Groq responses \
             so follow-up questions make sense."
        }
        Memory::Disabled => {
            "A minimal LLM chatbot using Groq. No memory, no framework, raw LLM behavior."
        }
    }
}
