use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::display_record::DisplayRecord;

pub const PARTIAL_FAILURE_WARNING: &str = "One or more analyses encountered an issue. Please check the results below.";

/// Records produced by one dispatch, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRound {
    pub records: Vec<DisplayRecord>,
    /// Non-blocking notice raised when at least one analysis failed.
    pub warning: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl AnalysisRound {
    pub fn new(records: Vec<DisplayRecord>, failures: usize) -> Self {
        Self {
            records,
            warning: (failures > 0).then(|| PARTIAL_FAILURE_WARNING.to_string()),
            completed_at: Utc::now(),
        }
    }

    pub fn has_failures(&self) -> bool {
        self.warning.is_some()
    }
}
