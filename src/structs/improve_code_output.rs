use serde::{Deserialize, Serialize};

/// Payload of the architecture-framework analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveCodeOutput {
    pub improved_code: String,
    pub explanation: String,
    /// Language of `improved_code`, when the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
