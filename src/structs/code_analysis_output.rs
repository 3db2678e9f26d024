use serde::{Deserialize, Serialize};

/// Payload of the general/security analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAnalysisOutput {
    pub recommendations: String,
}
