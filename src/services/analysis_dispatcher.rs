use std::sync::Arc;
use uuid::Uuid;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::analysis_outcome::{AnalysisOutcome, AnalysisPayload};
use crate::enums::severity::Severity;
use crate::errors::{CodeGuardError, CodeGuardResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_round::AnalysisRound;
use crate::structs::display_record::DisplayRecord;
use crate::traits::analysis_service::AnalysisService;

pub const EMPTY_CODE_MESSAGE: &str = "Please paste or upload some code to analyze.";
pub const DISPATCH_FAILURE_MESSAGE: &str = "An unexpected error occurred while initiating analysis. Please try again.";
pub const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

/// Runs both analysis kinds for a snippet and merges their outcomes.
#[derive(Clone)]
pub struct AnalysisDispatcher {
    service: Arc<dyn AnalysisService>,
}

impl AnalysisDispatcher {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self { service }
    }

    pub fn validate(code: &str) -> CodeGuardResult<AnalysisRequest> {
        let request = AnalysisRequest::new(code);
        if request.is_blank() {
            return Err(CodeGuardError::validation_error("code", EMPTY_CODE_MESSAGE));
        }
        Ok(request)
    }

    /// Start every analysis kind at once and wait for all of them to settle.
    ///
    /// A failing kind becomes a `Critical` record and never cancels its
    /// sibling. Only blank input and a failed join (a task panicked or was
    /// aborted) return `Err`; in the latter case no partial records survive.
    pub async fn dispatch(&self, code: &str) -> CodeGuardResult<AnalysisRound> {
        let request = Self::validate(code)?;
        log::info!("🔍 Dispatching {} analyses ({} bytes of code)", AnalysisKind::ALL.len(), request.code.len());

        let general = tokio::spawn({
            let service = Arc::clone(&self.service);
            let request = request.clone();
            async move { service.analyze_code(request).await }
        });
        let framework = tokio::spawn({
            let service = Arc::clone(&self.service);
            async move { service.improve_code(request).await }
        });

        let (general, framework) = match tokio::join!(general, framework) {
            (Ok(general), Ok(framework)) => (general, framework),
            (general, framework) => {
                let reason = [general.err(), framework.err()]
                    .into_iter()
                    .flatten()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                log::error!("❌ Overall analysis submission error: {}", reason);
                return Err(CodeGuardError::analysis_error("dispatch", &reason, true));
            }
        };

        let outcomes = [
            (AnalysisKind::General, AnalysisOutcome::from_result(general, AnalysisPayload::General)),
            (AnalysisKind::ArchitectureFramework, AnalysisOutcome::from_result(framework, AnalysisPayload::Framework)),
        ];

        let failures = outcomes.iter().filter(|(_, outcome)| outcome.is_failure()).count();
        let records: Vec<DisplayRecord> = outcomes
            .into_iter()
            .map(|(kind, outcome)| {
                if let AnalysisOutcome::Failure(message) = &outcome {
                    log::error!("❌ {} error: {}", kind.title(), message);
                }
                record_for(kind, outcome)
            })
            .collect();

        if failures > 0 {
            log::warn!("⚠️ {} of {} analyses failed", failures, records.len());
        } else {
            log::info!("✅ All {} analyses completed", records.len());
        }

        Ok(AnalysisRound::new(records, failures))
    }
}

fn record_for(kind: AnalysisKind, outcome: AnalysisOutcome) -> DisplayRecord {
    let suffix = Uuid::new_v4();

    match outcome {
        AnalysisOutcome::Success(AnalysisPayload::General(output)) => DisplayRecord::new(
            format!("{}-{}", kind.id_prefix(), suffix),
            kind.title().to_string(),
            output.recommendations,
        )
        .with_severity(kind.success_severity()),
        AnalysisOutcome::Success(AnalysisPayload::Framework(output)) => DisplayRecord::new(
            format!("{}-{}", kind.id_prefix(), suffix),
            kind.title().to_string(),
            output.explanation,
        )
        .with_code_block(
            output.improved_code,
            output.language.unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string()),
        )
        .with_severity(kind.success_severity()),
        AnalysisOutcome::Failure(message) => DisplayRecord::new(
            format!("{}-error-{}", kind.id_prefix(), suffix),
            kind.failed_title(),
            format!("An error occurred during this analysis: {}", message),
        )
        .with_severity(Severity::Critical),
    }
}
