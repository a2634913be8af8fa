use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::models::Transcript;

/// In-memory transcripts keyed by session ID. Sessions live until
/// the process exits.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Transcript>,
    turns: HashMap<String, Arc<Mutex<()>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self, session_id: &str) -> Option<&Transcript> {
        self.sessions.get(session_id)
    }

    /// Get the transcript for a session, starting an empty one on
    /// first use.
    pub fn get_or_create(&mut self, session_id: &str) -> &mut Transcript {
        self.sessions.entry(session_id.to_string()).or_default()
    }

    /// Lock that serializes turns within a session. Hold it from the
    /// user message being appended until the reply is appended so two
    /// turns in the same session can't interleave.
    pub fn turn_lock(&mut self, session_id: &str) -> Arc<Mutex<()>> {
        self.turns.entry(session_id.to_string()).or_default().clone()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
