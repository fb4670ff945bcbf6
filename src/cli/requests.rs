use anyhow::Result;

use crate::core::AppConfig;
use crate::openai::{
    conversation_request, simple_request, temperature_request, token_limit_request,
};

pub fn run(config: &AppConfig) -> Result<()> {
    let model = &config.model;

    println!("Simple request:");
    println!("{}", serde_json::to_string_pretty(&simple_request(model))?);

    println!("\nConversation request:");
    println!(
        "{}",
        serde_json::to_string_pretty(&conversation_request(model))?
    );

    println!("\nCreative temperature request:");
    println!(
        "{}",
        serde_json::to_string_pretty(&temperature_request(model, true))?
    );

    println!("\nFactual temperature request:");
    println!(
        "{}",
        serde_json::to_string_pretty(&temperature_request(model, false))?
    );

    println!("\nToken limit request:");
    println!(
        "{}",
        serde_json::to_string_pretty(&token_limit_request(model))?
    );

    Ok(())
}
