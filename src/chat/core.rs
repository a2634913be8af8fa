use crate::core::AgentError;
use crate::openai::{Message, Model, Role, TEMPERATURE, completion};
use super::models::Transcript;

/// Whether earlier turns are resent with each new question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Memory {
    /// Resend the session transcript so follow up questions keep
    /// their context
    #[default]
    Enabled,
    /// Every request is only the system prompt and the new question
    Disabled,
}

/// Build the messages for a completion request: the system prompt
/// followed by `history` in order.
pub fn compose(system_prompt: &str, history: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::new(Role::System, system_prompt));
    messages.extend_from_slice(history);
    messages
}

/// Start a turn. With memory enabled the user's message is recorded
/// in the transcript before composing the request so the request
/// always ends with it. The transcript is left untouched otherwise.
pub fn prepare_turn(
    memory: Memory,
    system_prompt: &str,
    transcript: &mut Transcript,
    user_msg: Message,
) -> Vec<Message> {
    match memory {
        Memory::Enabled => {
            transcript.push(user_msg);
            compose(system_prompt, transcript.messages())
        }
        Memory::Disabled => compose(system_prompt, std::slice::from_ref(&user_msg)),
    }
}

/// Complete a turn by recording the reply so it's resent next time.
pub fn finish_turn(memory: Memory, transcript: &mut Transcript, reply: Message) {
    if memory == Memory::Enabled {
        transcript.push(reply);
    }
}

/// A chat with an LLM over an OpenAI compatible API that owns its
/// transcript. Used where there is exactly one session, like the
/// terminal chat.
///
/// Use `ChatBuilder` to construct a `Chat`.
pub struct Chat {
    api_hostname: String,
    api_key: String,
    model: Model,
    system_prompt: String,
    memory: Memory,
    transcript: Transcript,
}

impl Chat {
    /// Runs the next turn in the chat and returns the assistant's
    /// reply.
    ///
    /// If the completion fails the user's message stays in the
    /// transcript (memory enabled) but no reply is added.
    pub async fn next_msg(&mut self, content: &str) -> Result<Message, AgentError> {
        let user_msg = Message::new(Role::User, content);
        let request = prepare_turn(
            self.memory,
            &self.system_prompt,
            &mut self.transcript,
            user_msg,
        );

        tracing::debug!(
            "Sending {} messages to {} using {}",
            request.len(),
            self.api_hostname,
            self.model
        );

        let reply = completion(
            &request,
            self.model,
            TEMPERATURE,
            &self.api_hostname,
            &self.api_key,
        )
        .await?;
        let reply = Message::new(Role::Assistant, &reply);
        finish_turn(self.memory, &mut self.transcript, reply.clone());

        Ok(reply)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

pub struct ChatBuilder {
    api_hostname: String,
    api_key: String,
    model: Model,
    system_prompt: String,
    memory: Memory,
    transcript: Transcript,
}

impl ChatBuilder {
    pub fn new(api_hostname: &str, api_key: &str, model: Model) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model,
            system_prompt: String::from("You are a helpful assistant."),
            memory: Memory::default(),
            transcript: Transcript::new(),
        }
    }

    pub fn build(self) -> Chat {
        Chat {
            api_hostname: self.api_hostname,
            api_key: self.api_key,
            model: self.model,
            system_prompt: self.system_prompt,
            memory: self.memory,
            transcript: self.transcript,
        }
    }

    pub fn system_prompt(mut self, system_prompt: &str) -> Self {
        self.system_prompt = system_prompt.to_string();
        self
    }

    pub fn memory(mut self, memory: Memory) -> Self {
        self.memory = memory;
        self
    }

    pub fn transcript(mut self, messages: Vec<Message>) -> Self {
        self.transcript = Transcript::new_with_messages(messages);
        self
    }
}
