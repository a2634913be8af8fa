//! Router for the chat API

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::state::{SharedState, next_turn};
use crate::openai::Model;

/// Get the transcript of a chat session by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let transcript = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.sessions.transcript(&id).cloned()
    };

    match transcript {
        Some(transcript) if !transcript.is_empty() => {
            Ok(axum::Json(public::ChatTranscriptResponse { transcript }).into_response())
        }
        _ => Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response()),
    }
}

/// List the models that can be chosen for a chat
async fn chat_models(State(state): State<SharedState>) -> axum::Json<public::ModelsResponse> {
    let default = state
        .read()
        .expect("Unable to read share state")
        .config
        .default_model;

    axum::Json(public::ModelsResponse {
        models: Model::ALL.to_vec(),
        default,
    })
}

/// Ask a question in a chat session and respond with the answer
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    if payload.message.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, "Message is empty").into_response());
    }

    let (system_prompt, model) = {
        let shared_state = state.read().expect("Unable to read share state");
        let config = &shared_state.config;
        (
            payload
                .system_prompt
                .unwrap_or_else(|| config.system_message.clone()),
            payload.model.unwrap_or(config.default_model),
        )
    };

    let reply = next_turn(
        &state,
        &payload.session_id,
        &payload.message,
        &system_prompt,
        model,
    )
    .await?;

    Ok(axum::Json(public::ChatResponse::new(reply.content())).into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/models", get(chat_models))
        .route("/{id}", get(chat_session))
}
