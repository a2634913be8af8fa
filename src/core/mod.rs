mod config;
mod error;

pub use config::{API_KEY_VAR, AppConfig};
pub use error::AgentError;
