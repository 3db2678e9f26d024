use serde::{Deserialize, Serialize};

/// Input for one analysis round: the raw code text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}
