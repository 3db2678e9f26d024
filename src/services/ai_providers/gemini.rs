use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::ai_providers::status_error;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            client: Client::new(),
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 4096,
            temperature: 0.2,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_generation(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> GeminiRequest {
        let system_instruction = (!system_prompt.is_empty()).then(|| GeminiContent::text(None, system_prompt));

        GeminiRequest {
            system_instruction,
            contents: user_prompts
                .into_iter()
                .map(|prompt| GeminiContent::text(Some("user"), prompt))
                .collect(),
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: Some(self.max_tokens),
                response_mime_type: Some("application/json".to_string()),
            }),
        }
    }

    async fn make_request(&self, url: String, request_body: GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = self.get_request(system_prompt, user_prompts);
        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &error_text));
        }

        let body: GeminiResponse = response.json().await?;
        match body.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AiProviderError::InvalidResponse("reply has no candidates".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_system_instruction_and_json_mime_type() {
        let provider = GeminiProvider::new("key".to_string());
        let json = serde_json::to_value(provider.get_request("sys".to_string(), vec!["code".to_string()])).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn joins_candidate_parts() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"ab"},{"text":"c"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(body.text().as_deref(), Some("abc"));
    }
}
