use std::time::Duration;

use anyhow::{Error, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Sampling temperature applied when a request doesn't specify one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Output token cap applied when a request doesn't specify one.
pub const DEFAULT_MAX_TOKENS: u32 = 100;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// A chat completion request payload for an OpenAI compatible API.
///
/// Optional sampling parameters are omitted from the serialized
/// payload when unset; `completion` fills in `DEFAULT_TEMPERATURE`
/// and `DEFAULT_MAX_TOKENS` at call time.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(model: &str, messages: Vec<Message>) -> Self {
        ChatRequest {
            model: model.to_string(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

pub async fn completion(
    request: &ChatRequest,
    api_hostname: &str,
    api_key: &str,
) -> Result<Value, Error> {
    // The API rejects an empty conversation so there is no point
    // going over the wire with one
    if request.messages.is_empty() {
        bail!("Request has no messages");
    }

    let payload = json!({
        "model": request.model,
        "messages": request.messages,
        "temperature": request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        "max_tokens": request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
    });

    tracing::debug!("\nCompletion request: {}", &payload);

    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}
