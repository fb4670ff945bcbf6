//! A thin agent abstraction over the chat capability. The agent holds
//! identity configuration and a bound model; chatting delegates to
//! whatever model is currently bound.

use anyhow::{Error, Result};

use crate::model::{ApiChatModel, BoxedChatModel, ChatModel, ModelConfig};

/// The two questions used by the stateless call demonstration.
pub const FIRST_QUESTION: &str = "Is 5 a prime number?";
pub const FOLLOW_UP_QUESTION: &str = "What about 15?";

/// Defines the complete configuration for an [`Agent`].
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// The name of the agent, used for identification and in logs.
    pub name: String,

    /// The system instructions that set the agent's persona.
    pub system_message: String,

    /// Configuration for the network-backed model the agent is bound
    /// to at construction.
    pub llm: ModelConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Assistant".to_string(),
            system_message: "You are a helpful assistant.".to_string(),
            llm: ModelConfig::default(),
        }
    }
}

/// A configured chat participant bound to a swappable model.
///
/// The agent owns its model exclusively. Rebinding via `set_model`
/// takes effect for every subsequent `chat` call, which is how tests
/// and the CLI substitute the deterministic mock for the network
/// model.
pub struct Agent {
    name: String,
    system_message: String,
    model: BoxedChatModel,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        let model = Box::new(ApiChatModel::new(&config.llm));
        Self {
            name: config.name,
            system_message: config.system_message,
            model,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system_message(&self) -> &str {
        &self.system_message
    }

    /// Replace the bound model. All subsequent delegation goes to the
    /// new model.
    pub fn set_model(&mut self, model: BoxedChatModel) {
        self.model = model;
    }

    /// Forward a message verbatim to the bound model and return its
    /// reply unchanged. The agent adds no memory and no system prompt
    /// injection here.
    pub async fn chat(&self, message: &str) -> Result<String, Error> {
        tracing::debug!("Agent {} delegating message: {}", &self.name, message);
        self.model.chat(message).await
    }
}

/// Call the model once per input with no shared context between the
/// two calls. The second reply depends only on the second input, not
/// on the first call having happened.
pub async fn direct_chat(
    model: &dyn ChatModel,
    first: &str,
    second: &str,
) -> Result<(String, String), Error> {
    let first_reply = model.chat(first).await?;
    let second_reply = model.chat(second).await?;

    Ok((first_reply, second_reply))
}
