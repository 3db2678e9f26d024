use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::code_analysis_output::CodeAnalysisOutput;
use crate::structs::improve_code_output::ImproveCodeOutput;

/// The external prompt service: one call per analysis kind, each returning
/// the kind's typed payload or a failure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze_code(&self, request: AnalysisRequest) -> Result<CodeAnalysisOutput, AiProviderError>;

    async fn improve_code(&self, request: AnalysisRequest) -> Result<ImproveCodeOutput, AiProviderError>;
}
