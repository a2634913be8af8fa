mod core;
mod models;
mod session;

pub use self::core::{Chat, ChatBuilder, Memory, compose, finish_turn, prepare_turn};
pub use models::Transcript;
pub use session::SessionStore;
