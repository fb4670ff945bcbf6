use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod ask;
pub mod chat;
pub mod requests;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Print the sample chat completion request payloads as JSON
    Requests {},
    /// Ask the model a single question and print the reply
    Ask {
        /// The question to ask
        prompt: Option<String>,

        /// Favor creative output over deterministic output
        #[arg(long, action, default_value = "false")]
        creative: bool,

        /// Cap the reply length in tokens
        #[arg(long)]
        max_tokens: Option<u32>,
    },
    /// Start a chat session with the agent
    Chat {
        /// Use the deterministic mock model instead of the API
        #[arg(long, action, default_value = "false")]
        mock: bool,
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
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Requests {}) => {
            requests::run(&config)?;
        }
        Some(Command::Ask {
            prompt,
            creative,
            max_tokens,
        }) => {
            ask::run(&config, prompt, creative, max_tokens).await;
        }
        Some(Command::Chat { mock }) => {
            chat::run(&config, mock).await?;
        }
        None => {}
    }

    Ok(())
}
