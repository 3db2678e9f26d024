use crate::config::constants::{ANTHROPIC_API_KEY_ENV, GEMINI_API_KEY_ENV, OPENAI_API_KEY_ENV};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "anthropic".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        4096
    }

    pub fn default_temperature() -> f32 {
        0.2
    }

    pub fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    pub fn default_api_key_env(provider: &str) -> &'static str {
        match provider.trim().to_ascii_lowercase().as_str() {
            "openai" => OPENAI_API_KEY_ENV,
            "gemini" | "googleai" => GEMINI_API_KEY_ENV,
            _ => ANTHROPIC_API_KEY_ENV,
        }
    }
}
