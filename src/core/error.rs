use thiserror::Error;

/// Everything that can stop a turn from producing a response.
///
/// Any failure talking to the completion endpoint is a `Completion`
/// error, whether it came from the network, auth or rate limits.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{0} not found in environment variables.")]
    MissingConfig(String),

    #[error("Error calling Groq API: {0}")]
    Completion(String),
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        Self::Completion(err.to_string())
    }
}
