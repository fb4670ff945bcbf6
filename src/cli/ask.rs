use crate::core::AppConfig;
use crate::openai::{
    CREATIVE_TEMPERATURE, ChatRequest, Message, Role, make_api_call, simple_request,
};

pub async fn run(
    config: &AppConfig,
    prompt: Option<String>,
    creative: bool,
    max_tokens: Option<u32>,
) {
    let mut request = match prompt {
        Some(prompt) => ChatRequest::new(
            &config.model,
            vec![Message::new(Role::User, prompt.as_str())],
        ),
        None => simple_request(&config.model),
    };

    if creative {
        request = request.temperature(CREATIVE_TEMPERATURE);
    }
    if let Some(cap) = max_tokens {
        request = request.max_tokens(cap);
    }

    // Failures come back as an error reply string so there is nothing
    // to unwind here
    let reply = make_api_call(&request, &config.api_hostname, &config.api_key).await;
    println!("{}", reply);
}
