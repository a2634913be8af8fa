use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

pub mod chat;
pub mod serve;

use crate::chat::Memory;
use crate::openai::Model;

#[derive(Clone, Copy, ValueEnum)]
enum MemoryArg {
    Enabled,
    Disabled,
}

impl From<MemoryArg> for Memory {
    fn from(arg: MemoryArg) -> Self {
        match arg {
            MemoryArg::Enabled => Memory::Enabled,
            MemoryArg::Disabled => Memory::Disabled,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelArg {
    #[value(name = "llama-3.3-70b-versatile")]
    Llama33Versatile,
    #[value(name = "llama-3.1-8b-instant")]
    Llama31Instant,
}

impl From<ModelArg> for Model {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Llama33Versatile => Model::Llama33Versatile,
            ModelArg::Llama31Instant => Model::Llama31Instant,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8501")]
        port: String,

        /// Resend earlier questions and answers with each question
        #[arg(long, value_enum, default_value = "enabled")]
        memory: MemoryArg,
    },
    /// Start a chat session in the terminal
    Chat {
        /// Model to use, defaults to FOUNDATION_AGENT_MODEL
        #[arg(long, value_enum)]
        model: Option<ModelArg>,

        /// Resend earlier questions and answers with each question
        #[arg(long, value_enum, default_value = "enabled")]
        memory: MemoryArg,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    // Pick up GROQ_API_KEY and friends from a local .env file when
    // there is one
    dotenv::dotenv().ok();

    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port, memory }) => {
            serve::run(host, port, memory.into()).await?;
        }
        Some(Command::Chat { model, memory }) => {
            chat::run(model.map(Model::from), memory.into()).await?;
        }
        None => {}
    }

    Ok(())
}
