use std::sync::Arc;
use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::json_extractor::parse_reply;
use crate::prompts::code_analysis_prompt::{code_analysis_user_prompt, CODE_ANALYSIS_SYSTEM_PROMPT};
use crate::prompts::improve_code_prompt::{improve_code_user_prompt, IMPROVE_CODE_SYSTEM_PROMPT};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::code_analysis_output::CodeAnalysisOutput;
use crate::structs::improve_code_output::ImproveCodeOutput;
use crate::traits::ai_provider::AiProvider;
use crate::traits::analysis_service::AnalysisService;

/// Prompt-backed analysis service: renders each kind's prompt, sends it
/// through an [`AiProvider`] and reads the reply against the kind's schema.
#[derive(Clone)]
pub struct PromptFlows {
    provider: Arc<dyn AiProvider>,
}

impl PromptFlows {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AnalysisService for PromptFlows {
    async fn analyze_code(&self, request: AnalysisRequest) -> Result<CodeAnalysisOutput, AiProviderError> {
        log::debug!("🔍 codeAnalysis prompt via {}", self.provider.name());
        let reply = self
            .provider
            .chat(CODE_ANALYSIS_SYSTEM_PROMPT.to_string(), vec![code_analysis_user_prompt(&request.code)])
            .await?;

        let output: CodeAnalysisOutput = parse_reply(&reply)?;
        if output.recommendations.trim().is_empty() {
            return Err(AiProviderError::InvalidResponse("recommendations are empty".to_string()));
        }

        Ok(output)
    }

    async fn improve_code(&self, request: AnalysisRequest) -> Result<ImproveCodeOutput, AiProviderError> {
        log::debug!("🏗️ improveCode prompt via {}", self.provider.name());
        let reply = self
            .provider
            .chat(IMPROVE_CODE_SYSTEM_PROMPT.to_string(), vec![improve_code_user_prompt(&request.code)])
            .await?;

        let mut output: ImproveCodeOutput = parse_reply(&reply)?;
        if output.explanation.trim().is_empty() {
            return Err(AiProviderError::InvalidResponse("explanation is empty".to_string()));
        }

        output.language = output
            .language
            .map(|language| language.trim().to_ascii_lowercase())
            .filter(|language| !language.is_empty());

        Ok(output)
    }
}
