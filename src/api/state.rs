use std::sync::{Arc, RwLock};

use handlebars::Handlebars;

use crate::chat::{SessionStore, finish_turn, prepare_turn};
use crate::core::{AgentError, AppConfig};
use crate::openai::{Message, Model, Role, TEMPERATURE, completion};

use super::routes::page::templates;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    pub sessions: SessionStore,
    pub config: AppConfig,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: SessionStore::new(),
            config,
            templates: templates(),
        }
    }
}

/// Run one question through the chat for `session_id` and return
/// the assistant's reply.
///
/// The lock on the shared state is only held to update the session
/// transcript, never while waiting on the completion endpoint. Turns
/// in the same session wait on the session's turn lock so each user
/// message is followed by its own reply.
pub async fn next_turn(
    state: &SharedState,
    session_id: &str,
    question: &str,
    system_prompt: &str,
    model: Model,
) -> Result<Message, AgentError> {
    let turn_lock = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        shared_state.sessions.turn_lock(session_id)
    };
    let _turn = turn_lock.lock().await;

    let (request, memory, api_hostname, api_key) = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        let api_key = shared_state.config.api_key()?.to_string();
        let api_hostname = shared_state.config.api_hostname.clone();
        let memory = shared_state.config.memory;
        let transcript = shared_state.sessions.get_or_create(session_id);
        let user_msg = Message::new(Role::User, question);
        let request = prepare_turn(memory, system_prompt, transcript, user_msg);
        (request, memory, api_hostname, api_key)
    };

    tracing::debug!(
        "Session {} sending {} messages using {}",
        session_id,
        request.len(),
        model
    );

    let reply = completion(&request, model, TEMPERATURE, &api_hostname, &api_key)
        .await
        .inspect_err(|e| tracing::error!("Session {} completion failed: {}", session_id, e))?;
    let reply = Message::new(Role::Assistant, &reply);

    {
        let mut shared_state = state.write().expect("Unable to write shared state");
        let transcript = shared_state.sessions.get_or_create(session_id);
        finish_turn(memory, transcript, reply.clone());
    }

    Ok(reply)
}
