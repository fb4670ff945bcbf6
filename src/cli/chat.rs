use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::agent::{Agent, AgentConfig};
use crate::core::AppConfig;
use crate::model::{MockChatModel, ModelConfig};

pub async fn run(config: &AppConfig, mock: bool) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let agent_config = AgentConfig {
        system_message: config.system_message.clone(),
        llm: ModelConfig::from(config),
        ..AgentConfig::default()
    };
    let mut agent = Agent::new(agent_config);

    if mock {
        agent.set_model(Box::new(MockChatModel::default()));
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let reply = agent.chat(line.as_str()).await?;
                println!("{}", reply);
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
