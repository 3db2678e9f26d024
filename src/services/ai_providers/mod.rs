pub mod anthropic;
pub mod openai;
pub mod gemini;

use std::sync::Arc;
use reqwest::StatusCode;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{CodeGuardError, CodeGuardResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::ai_providers::anthropic::AnthropicProvider;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::structs::ai::api_error::ApiError;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Map a non-2xx chat API response to a provider error.
pub fn status_error(status: StatusCode, body: &str) -> AiProviderError {
    let detail = ApiError::describe(body);
    log::debug!("AI API error response ({}): {}", status, body);

    match status.as_u16() {
        401 | 403 => AiProviderError::AuthenticationError(detail),
        429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", detail)),
        _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, detail)),
    }
}

/// Build the configured provider, reading its API key from the environment.
pub fn create_provider(config: &AiConfig) -> CodeGuardResult<Arc<dyn AiProvider>> {
    let key_env = config
        .api_key_env
        .clone()
        .unwrap_or_else(|| ConfigHelper::default_api_key_env(&config.provider).to_string());

    let api_key = std::env::var(&key_env).map_err(|_| {
        CodeGuardError::config_error(
            &format!("Environment variable {} is not set", key_env),
            Some("ai.api_key_env"),
            Some(&format!("Export your {} API key as {}", config.provider, key_env)),
        )
    })?;

    create_provider_with_key(config, api_key)
}

pub fn create_provider_with_key(config: &AiConfig, api_key: String) -> CodeGuardResult<Arc<dyn AiProvider>> {
    let provider: Arc<dyn AiProvider> = match config.provider.trim().to_ascii_lowercase().as_str() {
        "anthropic" => {
            let mut provider = AnthropicProvider::new(api_key).with_generation(config.max_tokens, config.temperature);
            if let Some(model) = &config.model {
                provider = provider.with_model(model.clone());
            }
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        "openai" => {
            let mut provider = OpenAIProvider::new(api_key).with_generation(config.max_tokens, config.temperature);
            if let Some(model) = &config.model {
                provider = provider.with_model(model.clone());
            }
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        "gemini" | "googleai" => {
            let mut provider = GeminiProvider::new(api_key).with_generation(config.max_tokens, config.temperature);
            if let Some(model) = &config.model {
                provider = provider.with_model(model.clone());
            }
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        other => {
            return Err(CodeGuardError::config_error(
                &format!("Unsupported AI provider '{}'", other),
                Some("ai.provider"),
                Some("Use one of: anthropic, openai, gemini"),
            ));
        }
    };

    log::debug!("🤖 Using AI provider: {}", provider.name());
    Ok(provider)
}
