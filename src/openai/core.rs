use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::AgentError;

/// Sampling temperature sent with every completion request.
pub const TEMPERATURE: f64 = 0.7;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// A single role tagged message in a chat. Messages are never edited
/// after they are created, only appended to a transcript.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The models that can be selected for a chat.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub enum Model {
    #[default]
    #[serde(rename = "llama-3.3-70b-versatile")]
    Llama33Versatile,
    #[serde(rename = "llama-3.1-8b-instant")]
    Llama31Instant,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Llama33Versatile, Model::Llama31Instant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Llama33Versatile => "llama-3.3-70b-versatile",
            Model::Llama31Instant => "llama-3.1-8b-instant",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("Unknown model: {}", s))
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: Model,
    messages: &'a [Message],
    temperature: f64,
}

#[derive(Deserialize, Debug)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize, Debug)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize, Debug)]
struct CompletionMessage {
    content: Option<String>,
}

/// Sends `messages` to an OpenAI compatible chat completions API and
/// returns the content of the first choice.
pub async fn completion(
    messages: &[Message],
    model: Model,
    temperature: f64,
    api_hostname: &str,
    api_key: &str,
) -> Result<String, AgentError> {
    let payload = CompletionRequest {
        model,
        messages,
        temperature,
    };
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response: CompletionResponse = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AgentError::Completion("No message received".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn completion_body(content: &str) -> String {
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

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    }

    #[test]
    fn test_role_deserialization() {
        assert_eq!(serde_json::from_str::<Role>(r#""system""#).unwrap(), Role::System);
        assert_eq!(serde_json::from_str::<Role>(r#""user""#).unwrap(), Role::User);
        assert!(serde_json::from_str::<Role>(r#""tool""#).is_err());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(Role::User, "Hello");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "user", "content": "Hello"})
        );
    }

    #[test]
    fn test_model_names() {
        assert_eq!(
            serde_json::to_string(&Model::Llama33Versatile).unwrap(),
            r#""llama-3.3-70b-versatile""#
        );
        assert_eq!(
            "llama-3.1-8b-instant".parse::<Model>().unwrap(),
            Model::Llama31Instant
        );
        assert!("gpt-4".parse::<Model>().is_err());
        assert_eq!(Model::default(), Model::Llama33Versatile);
    }

    #[tokio::test]
    async fn test_completion_returns_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let messages = vec![
            Message::new(Role::System, "You are a helpful assistant."),
            Message::new(Role::User, "Hi"),
        ];
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::Json(json!({
                "model": "llama-3.1-8b-instant",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Hi"}
                ],
                "temperature": 0.7
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Hello! How can I help you today?"))
            .create_async()
            .await;

        let content = completion(
            &messages,
            Model::Llama31Instant,
            TEMPERATURE,
            &server.url(),
            "test-key",
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(content, "Hello! How can I help you today?");
    }

    #[tokio::test]
    async fn test_completion_trims_trailing_slash() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(completion_body("ok"))
            .create_async()
            .await;

        let url = format!("{}/", server.url());
        let content = completion(&[], Model::default(), TEMPERATURE, &url, "test-key")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(content, "ok");
    }

    #[tokio::test]
    async fn test_completion_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Invalid API Key"}}"#)
            .create_async()
            .await;

        let err = completion(&[], Model::default(), TEMPERATURE, &server.url(), "bad-key")
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Completion(_)));
        assert!(err.to_string().starts_with("Error calling Groq API:"));
    }

    #[tokio::test]
    async fn test_completion_without_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let err = completion(&[], Model::default(), TEMPERATURE, &server.url(), "test-key")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error calling Groq API: No message received");
    }

    #[tokio::test]
    async fn test_completion_unreachable_host() {
        // Nothing listens on port 9 (discard) in the test environment
        let err = completion(
            &[],
            Model::default(),
            TEMPERATURE,
            "http://127.0.0.1:9",
            "test-key",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AgentError::Completion(_)));
    }
}
