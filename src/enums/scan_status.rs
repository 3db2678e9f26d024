use serde::{Deserialize, Serialize};

/// Lifecycle of a connected repository scan.
///
/// The simulated scanner only ever moves `Scanning -> Completed`; `Failed`
/// has no trigger until a real scan backend exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Scanning,
    Completed,
    Failed,
}

impl ScanStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Scanning)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scanning => "⏳ Scanning",
            Self::Completed => "✅ Completed",
            Self::Failed => "❌ Failed",
        }
    }
}
