use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub model: String,
    pub api_hostname: String,
    pub api_key: String,
    pub system_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_hostname = env::var("PARLEY_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let model = env::var("PARLEY_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());
        let system_message = env::var("PARLEY_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| "You are a helpful assistant.".to_string());

        Self {
            model,
            api_hostname,
            api_key,
            system_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        unsafe {
            env::remove_var("PARLEY_LLM_HOST");
            env::remove_var("PARLEY_LLM_MODEL");
            env::remove_var("PARLEY_SYSTEM_MESSAGE");
        }

        let config = AppConfig::default();
        assert_eq!(config.api_hostname, "https://api.openai.com");
        assert_eq!(config.model, "gpt-4.1-mini");
        assert_eq!(config.system_message, "You are a helpful assistant.");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            env::set_var("PARLEY_LLM_HOST", "http://localhost:8080");
            env::set_var("PARLEY_LLM_MODEL", "local-model");
            env::set_var("PARLEY_SYSTEM_MESSAGE", "You are terse.");
        }

        let config = AppConfig::default();
        assert_eq!(config.api_hostname, "http://localhost:8080");
        assert_eq!(config.model, "local-model");
        assert_eq!(config.system_message, "You are terse.");

        unsafe {
            env::remove_var("PARLEY_LLM_HOST");
            env::remove_var("PARLEY_LLM_MODEL");
            env::remove_var("PARLEY_SYSTEM_MESSAGE");
        }
    }
}
