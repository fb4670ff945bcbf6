//! The chat capability abstraction. Anything that can turn an input
//! utterance into a reply implements `ChatModel`, which is what lets
//! callers swap the network-backed model for a deterministic mock.

mod mock;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;

use crate::core::AppConfig;
use crate::openai::{ChatRequest, Message, Role, completion};

pub use mock::{MockChatModel, Pattern, Rule};

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Produce a reply to a single input utterance.
    async fn chat(&self, text: &str) -> Result<String, Error>;
}

pub type BoxedChatModel = Box<dyn ChatModel + Send + Sync + 'static>;

/// Construction-time configuration for a network-backed chat model.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_hostname: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4.1-mini".to_string(),
            temperature: Some(0.7),
            max_tokens: Some(500),
        }
    }
}

impl From<&AppConfig> for ModelConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_hostname: config.api_hostname.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            ..Self::default()
        }
    }
}

/// A chat model backed by an OpenAI compatible completion API.
pub struct ApiChatModel {
    config: ModelConfig,
}

impl ApiChatModel {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl ChatModel for ApiChatModel {
    async fn chat(&self, text: &str) -> Result<String, Error> {
        let mut request = ChatRequest::new(
            &self.config.model,
            vec![Message::new(Role::User, text)],
        );
        request.temperature = self.config.temperature;
        request.max_tokens = self.config.max_tokens;

        let resp = completion(&request, &self.config.api_hostname, &self.config.api_key).await?;

        resp["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or(anyhow!("No message content in response: {}", resp))
    }
}
