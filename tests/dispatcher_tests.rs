use std::sync::Arc;
use std::time::Duration;
use codeguard_cli::enums::ai_provider_error::AiProviderError;
use codeguard_cli::enums::severity::Severity;
use codeguard_cli::errors::CodeGuardError;
use codeguard_cli::services::analysis_dispatcher::{AnalysisDispatcher, EMPTY_CODE_MESSAGE};
use codeguard_cli::structs::analysis_round::PARTIAL_FAILURE_WARNING;
use proptest::prelude::*;
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};
use crate::support::{improved, recommendations, PanickingService, ScriptedService};

const GENERAL_TITLE: &str = "General Code Analysis & Security Review";
const FRAMEWORK_TITLE: &str = "AWS Well-Architected Framework Analysis";

#[tokio::test(start_paused = true)]
async fn order_is_fixed_when_framework_settles_first() {
    let service = ScriptedService::succeeding().with_delays(Duration::from_secs(3), Duration::from_millis(10));
    let dispatcher = AnalysisDispatcher::new(Arc::new(service));

    let round = assert_ok!(dispatcher.dispatch("SELECT * FROM users").await);

    assert_eq!(round.records.len(), 2);
    assert_eq!(round.records[0].title, GENERAL_TITLE);
    assert_eq!(round.records[1].title, FRAMEWORK_TITLE);
    assert!(round.warning.is_none());
}

#[tokio::test(start_paused = true)]
async fn order_is_fixed_when_general_fails_last() {
    let service = ScriptedService::new(
        Err(AiProviderError::Unexpected("timeout".to_string())),
        Ok(improved("x", "y")),
    )
    .with_delays(Duration::from_secs(5), Duration::ZERO);
    let dispatcher = AnalysisDispatcher::new(Arc::new(service));

    let round = assert_ok!(dispatcher.dispatch("code").await);

    assert_eq!(round.records[0].severity, Some(Severity::Critical));
    assert!(round.records[0].content.contains("timeout"));
    assert_eq!(round.records[1].severity, Some(Severity::Info));
    assert_eq!(round.records[1].code_block.as_deref(), Some("x"));
    assert_eq!(round.warning.as_deref(), Some(PARTIAL_FAILURE_WARNING));
}

#[tokio::test(start_paused = true)]
async fn analyses_run_concurrently() {
    let service = ScriptedService::succeeding().with_delays(Duration::from_secs(3), Duration::from_secs(2));
    let dispatcher = AnalysisDispatcher::new(Arc::new(service));

    let started = Instant::now();
    assert_ok!(dispatcher.dispatch("code").await);

    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn both_failures_still_produce_two_records() {
    let service = ScriptedService::new(
        Err(AiProviderError::ApiError("HTTP 500".to_string())),
        Err(AiProviderError::NetworkError("connection reset".to_string())),
    );
    let dispatcher = AnalysisDispatcher::new(Arc::new(service));

    let round = assert_ok!(dispatcher.dispatch("code").await);

    assert_eq!(round.records.len(), 2);
    assert!(round.records.iter().all(|record| record.severity == Some(Severity::Critical)));
    assert_eq!(round.records[0].title, format!("{} - Failed", GENERAL_TITLE));
    assert_eq!(round.records[1].title, format!("{} - Failed", FRAMEWORK_TITLE));
    assert!(round.has_failures());
}

#[tokio::test]
async fn a_crashed_task_discards_the_whole_round() {
    let dispatcher = AnalysisDispatcher::new(Arc::new(PanickingService));

    let error = assert_err!(dispatcher.dispatch("code").await);

    match error {
        CodeGuardError::AnalysisError { stage, .. } => assert_eq!(stage, "dispatch"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn successful_general_record_is_high() {
    let service = ScriptedService::new(Ok(recommendations("Use parameterized queries")), Ok(improved("x", "y")));
    let dispatcher = AnalysisDispatcher::new(Arc::new(service));

    let round = assert_ok!(dispatcher.dispatch("code").await);

    assert_eq!(round.records[0].severity, Some(Severity::High));
    assert_eq!(round.records[0].content, "Use parameterized queries");
}

proptest! {
    #[test]
    fn whitespace_only_input_never_reaches_the_service(code in "[ \t\r\n]{0,32}") {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        let service = Arc::new(ScriptedService::succeeding());
        let dispatcher = AnalysisDispatcher::new(service.clone());

        let result = runtime.block_on(dispatcher.dispatch(&code));

        let error = result.unwrap_err();
        prop_assert_eq!(error.to_string(), EMPTY_CODE_MESSAGE);
        prop_assert_eq!(service.calls(), 0);
    }

    #[test]
    fn non_blank_input_always_yields_two_records(code in "[ \n]{0,4}[a-z(){};=]{1,40}[ \n]{0,4}") {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        let service = Arc::new(ScriptedService::succeeding());
        let dispatcher = AnalysisDispatcher::new(service.clone());

        let round = runtime.block_on(dispatcher.dispatch(&code)).unwrap();

        prop_assert_eq!(round.records.len(), 2);
        prop_assert_eq!(service.calls(), 2);
    }
}
