use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::code_analysis_output::CodeAnalysisOutput;
use crate::structs::improve_code_output::ImproveCodeOutput;

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPayload {
    General(CodeAnalysisOutput),
    Framework(ImproveCodeOutput),
}

/// How one analysis kind settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success(AnalysisPayload),
    Failure(String),
}

impl AnalysisOutcome {
    pub fn from_result<T>(result: Result<T, AiProviderError>, payload: impl FnOnce(T) -> AnalysisPayload) -> Self {
        match result {
            Ok(value) => Self::Success(payload(value)),
            Err(error) if error.detail().trim().is_empty() => Self::Failure(UNKNOWN_ERROR.to_string()),
            Err(error) => Self::Failure(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
