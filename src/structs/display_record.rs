use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

/// Renderable summary of one analysis outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_block_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl DisplayRecord {
    pub fn new(id: String, title: String, content: String) -> Self {
        Self {
            id,
            title,
            content,
            code_block: None,
            code_block_language: None,
            severity: None,
        }
    }

    pub fn with_code_block(mut self, code: String, language: String) -> Self {
        self.code_block = Some(code);
        self.code_block_language = Some(language);
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Some(Severity::Critical)
    }
}
