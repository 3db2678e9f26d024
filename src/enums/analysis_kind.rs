use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

/// The two categories of AI review run for every submitted snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    General,
    ArchitectureFramework,
}

impl AnalysisKind {
    /// Dispatch order; records are emitted in this order.
    pub const ALL: [AnalysisKind; 2] = [AnalysisKind::General, AnalysisKind::ArchitectureFramework];

    pub fn title(&self) -> &'static str {
        match self {
            Self::General => "General Code Analysis & Security Review",
            Self::ArchitectureFramework => "AWS Well-Architected Framework Analysis",
        }
    }

    pub fn failed_title(&self) -> String {
        format!("{} - Failed", self.title())
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::ArchitectureFramework => "aws",
        }
    }

    /// There is no real severity scoring, so general findings are reported
    /// at `High` and framework suggestions at `Info`.
    pub fn success_severity(&self) -> Severity {
        match self {
            Self::General => Severity::High,
            Self::ArchitectureFramework => Severity::Info,
        }
    }
}
