use std::collections::BTreeMap;
use serde::{Deserialize, Deserializer, Serialize};
use crate::enums::architecture_pillar::ArchitecturePillar;
use crate::enums::design_principle::DesignPrinciple;

/// Analysis focus preferences. Held in memory only; nothing in the
/// analysis flow reads them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    #[serde(deserialize_with = "complete_pillars")]
    pub pillars: BTreeMap<ArchitecturePillar, bool>,
    #[serde(deserialize_with = "complete_principles")]
    pub principles: BTreeMap<DesignPrinciple, bool>,
}

// Incoming maps may be partial; every fixed id is always present and
// defaults to enabled.
fn complete_pillars<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<ArchitecturePillar, bool>, D::Error> {
    let given = BTreeMap::<ArchitecturePillar, bool>::deserialize(deserializer)?;
    Ok(ArchitecturePillar::ALL
        .into_iter()
        .map(|pillar| (pillar, given.get(&pillar).copied().unwrap_or(true)))
        .collect())
}

fn complete_principles<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<DesignPrinciple, bool>, D::Error> {
    let given = BTreeMap::<DesignPrinciple, bool>::deserialize(deserializer)?;
    Ok(DesignPrinciple::ALL
        .into_iter()
        .map(|principle| (principle, given.get(&principle).copied().unwrap_or(true)))
        .collect())
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            pillars: ArchitecturePillar::ALL.into_iter().map(|pillar| (pillar, true)).collect(),
            principles: DesignPrinciple::ALL.into_iter().map(|principle| (principle, true)).collect(),
        }
    }
}

impl AnalysisSettings {
    pub fn set_pillar(&mut self, pillar: ArchitecturePillar, enabled: bool) {
        self.pillars.insert(pillar, enabled);
    }

    pub fn set_principle(&mut self, principle: DesignPrinciple, enabled: bool) {
        self.principles.insert(principle, enabled);
    }

    pub fn is_pillar_enabled(&self, pillar: ArchitecturePillar) -> bool {
        self.pillars.get(&pillar).copied().unwrap_or(false)
    }

    pub fn is_principle_enabled(&self, principle: DesignPrinciple) -> bool {
        self.principles.get(&principle).copied().unwrap_or(false)
    }

    pub fn enabled_pillars(&self) -> Vec<ArchitecturePillar> {
        self.pillars.iter().filter(|(_, enabled)| **enabled).map(|(pillar, _)| *pillar).collect()
    }

    pub fn enabled_principles(&self) -> Vec<DesignPrinciple> {
        self.principles.iter().filter(|(_, enabled)| **enabled).map(|(principle, _)| *principle).collect()
    }
}
