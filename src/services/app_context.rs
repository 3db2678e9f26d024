use std::sync::Arc;
use crate::errors::CodeGuardResult;
use crate::services::ai_providers::create_provider;
use crate::services::analysis_dispatcher::AnalysisDispatcher;
use crate::services::prompt_flows::PromptFlows;
use crate::services::repository_scanner::RepositoryScanner;
use crate::services::settings_store::SettingsStore;
use crate::structs::config::config::Config;
use crate::traits::analysis_service::AnalysisService;

/// Session state shared by the CLI and the dashboard server.
#[derive(Clone)]
pub struct AppContext {
    pub dispatcher: AnalysisDispatcher,
    pub scanner: RepositoryScanner,
    pub settings: SettingsStore,
}

impl AppContext {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self::with_scanner(service, RepositoryScanner::new())
    }

    pub fn with_scanner(service: Arc<dyn AnalysisService>, scanner: RepositoryScanner) -> Self {
        Self {
            dispatcher: AnalysisDispatcher::new(service),
            scanner,
            settings: SettingsStore::default(),
        }
    }

    pub fn from_config(config: &Config) -> CodeGuardResult<Self> {
        let provider = create_provider(&config.ai)?;
        log::info!("🤖 Using {} for analysis", provider.name());
        Ok(Self::new(Arc::new(PromptFlows::new(provider))))
    }
}
