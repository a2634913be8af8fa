use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{ChatBuilder, Memory};
use crate::core::AppConfig;
use crate::openai::Model;

pub async fn run(model: Option<Model>, memory: Memory) -> Result<()> {
    let config = AppConfig::default();
    let api_key = config.api_key()?;
    let model = model.unwrap_or(config.default_model);

    let mut chat = ChatBuilder::new(&config.api_hostname, api_key, model)
        .system_prompt(&config.system_message)
        .memory(memory)
        .build();

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!("Failed to add history entry: {}", e);
                }

                // A failed call doesn't end the session, the question
                // can be asked again
                match chat.next_msg(&line).await {
                    Ok(msg) => println!("{}", msg.content()),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
