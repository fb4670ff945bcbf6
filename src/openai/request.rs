//! Canned request constructors for the chat completion API. These
//! cover the common request shapes: a single question, a multi-turn
//! transcript, sampling temperature selection, and output length
//! capping.

use super::core::{ChatRequest, Message, Role};

/// Temperature used when the caller wants varied, creative output.
pub const CREATIVE_TEMPERATURE: f32 = 0.9;
/// Temperature used when the caller wants deterministic, factual output.
pub const FACTUAL_TEMPERATURE: f32 = 0.2;

/// A request with a single user message asking a fixed question.
pub fn simple_request(model: &str) -> ChatRequest {
    ChatRequest::new(
        model,
        vec![Message::new(Role::User, "What is the capital of France?")],
    )
}

/// A request carrying a multi-turn conversation about programming.
/// Message order is conversation order.
pub fn conversation_request(model: &str) -> ChatRequest {
    let messages = vec![
        Message::new(Role::System, "You are a helpful programming assistant."),
        Message::new(Role::User, "What is a variable?"),
        Message::new(
            Role::Assistant,
            "A variable is a named storage location in memory that holds a value.",
        ),
        Message::new(Role::User, "What are the rules for naming variables?"),
    ];

    ChatRequest::new(model, messages)
}

/// A request with the sampling temperature picked by whether the
/// caller needs creative output.
pub fn temperature_request(model: &str, creativity_needed: bool) -> ChatRequest {
    let temperature = if creativity_needed {
        CREATIVE_TEMPERATURE
    } else {
        FACTUAL_TEMPERATURE
    };

    ChatRequest::new(
        model,
        vec![Message::new(Role::User, "Generate a haiku about programming")],
    )
    .temperature(temperature)
}

/// A request that caps the response at roughly 50 tokens.
pub fn token_limit_request(model: &str) -> ChatRequest {
    ChatRequest::new(
        model,
        vec![Message::new(Role::User, "Explain machine learning in detail")],
    )
    .max_tokens(50)
}
