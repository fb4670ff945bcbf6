mod chat;
mod core;
mod request;

pub use chat::make_api_call;
pub use self::core::{
    ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, Message, Role, completion,
};
pub use request::{
    CREATIVE_TEMPERATURE, FACTUAL_TEMPERATURE, conversation_request, simple_request,
    temperature_request, token_limit_request,
};
