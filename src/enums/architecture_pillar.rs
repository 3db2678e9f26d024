use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::CodeGuardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArchitecturePillar {
    Security,
    OperationalExcellence,
    Reliability,
    PerformanceEfficiency,
    CostOptimization,
    Sustainability,
}

impl ArchitecturePillar {
    pub const ALL: [ArchitecturePillar; 6] = [
        ArchitecturePillar::Security,
        ArchitecturePillar::OperationalExcellence,
        ArchitecturePillar::Reliability,
        ArchitecturePillar::PerformanceEfficiency,
        ArchitecturePillar::CostOptimization,
        ArchitecturePillar::Sustainability,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::OperationalExcellence => "operationalExcellence",
            Self::Reliability => "reliability",
            Self::PerformanceEfficiency => "performanceEfficiency",
            Self::CostOptimization => "costOptimization",
            Self::Sustainability => "sustainability",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::OperationalExcellence => "Operational Excellence",
            Self::Reliability => "Reliability",
            Self::PerformanceEfficiency => "Performance Efficiency",
            Self::CostOptimization => "Cost Optimization",
            Self::Sustainability => "Sustainability",
        }
    }
}

impl fmt::Display for ArchitecturePillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArchitecturePillar {
    type Err = CodeGuardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pillar| pillar.id().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CodeGuardError::validation_error("pillar", &format!("Unknown architecture pillar '{}'.", value)))
    }
}
