use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use codeguard_cli::enums::ai_provider_error::AiProviderError;
use codeguard_cli::structs::analysis_request::AnalysisRequest;
use codeguard_cli::structs::code_analysis_output::CodeAnalysisOutput;
use codeguard_cli::structs::improve_code_output::ImproveCodeOutput;
use codeguard_cli::traits::analysis_service::AnalysisService;

/// Analysis service with fixed replies, optional per-kind latency and a call counter.
pub struct ScriptedService {
    general: Result<CodeAnalysisOutput, AiProviderError>,
    framework: Result<ImproveCodeOutput, AiProviderError>,
    general_delay: Duration,
    framework_delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new(
        general: Result<CodeAnalysisOutput, AiProviderError>,
        framework: Result<ImproveCodeOutput, AiProviderError>,
    ) -> Self {
        Self {
            general,
            framework,
            general_delay: Duration::ZERO,
            framework_delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Ok(recommendations("Validate all user input")), Ok(improved("x", "y")))
    }

    pub fn with_delays(mut self, general: Duration, framework: Duration) -> Self {
        self.general_delay = general;
        self.framework_delay = framework;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    async fn analyze_code(&self, _request: AnalysisRequest) -> Result<CodeAnalysisOutput, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.general_delay).await;
        self.general.clone()
    }

    async fn improve_code(&self, _request: AnalysisRequest) -> Result<ImproveCodeOutput, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.framework_delay).await;
        self.framework.clone()
    }
}

/// Blows up inside the general analysis task.
pub struct PanickingService;

#[async_trait]
impl AnalysisService for PanickingService {
    async fn analyze_code(&self, _request: AnalysisRequest) -> Result<CodeAnalysisOutput, AiProviderError> {
        panic!("analysis task crashed")
    }

    async fn improve_code(&self, _request: AnalysisRequest) -> Result<ImproveCodeOutput, AiProviderError> {
        Ok(improved("x", "y"))
    }
}

pub fn recommendations(text: &str) -> CodeAnalysisOutput {
    CodeAnalysisOutput {
        recommendations: text.to_string(),
    }
}

pub fn improved(code: &str, explanation: &str) -> ImproveCodeOutput {
    ImproveCodeOutput {
        improved_code: code.to_string(),
        explanation: explanation.to_string(),
        language: None,
    }
}
