use std::sync::Arc;
use tokio::sync::RwLock;
use crate::enums::architecture_pillar::ArchitecturePillar;
use crate::enums::design_principle::DesignPrinciple;
use crate::errors::CodeGuardResult;
use crate::structs::analysis_settings::AnalysisSettings;

pub const SETTINGS_SAVED_MESSAGE: &str = "Your analysis preferences have been updated.";

/// In-memory analysis preferences, lost when the process exits.
#[derive(Clone, Default)]
pub struct SettingsStore {
    settings: Arc<RwLock<AnalysisSettings>>,
}

impl SettingsStore {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub async fn snapshot(&self) -> AnalysisSettings {
        self.settings.read().await.clone()
    }

    pub async fn replace(&self, settings: AnalysisSettings) -> AnalysisSettings {
        let mut current = self.settings.write().await;
        *current = settings;
        log::info!(
            "⚙️ Settings saved: {} pillars, {} principles enabled",
            current.enabled_pillars().len(),
            current.enabled_principles().len()
        );
        current.clone()
    }

    pub async fn set_pillar(&self, id: &str, enabled: bool) -> CodeGuardResult<AnalysisSettings> {
        let pillar: ArchitecturePillar = id.parse()?;
        let mut current = self.settings.write().await;
        current.set_pillar(pillar, enabled);
        log::debug!("Pillar {} set to {}", pillar.id(), enabled);
        Ok(current.clone())
    }

    pub async fn set_principle(&self, id: &str, enabled: bool) -> CodeGuardResult<AnalysisSettings> {
        let principle: DesignPrinciple = id.parse()?;
        let mut current = self.settings.write().await;
        current.set_principle(principle, enabled);
        log::debug!("Principle {} set to {}", principle.id(), enabled);
        Ok(current.clone())
    }
}
